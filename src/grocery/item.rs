use serde::{Deserialize, Serialize};

/// UPC stored for items that were entered by hand and carry no barcode.
pub const MANUAL_UPC: i64 = -1;

fn manual_upc() -> i64 {
    MANUAL_UPC
}

/// A grocery item as kept in a user's pantry.
///
/// Plain record: nothing is validated, every setter overwrites its field
/// as given. Serialized keys follow the backend column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    #[serde(rename = "ItemName")]
    name: String,

    #[serde(rename = "ExpireDate")]
    expiry: String,

    #[serde(rename = "ItemCount")]
    quantity: i32,

    #[serde(rename = "ItemID")]
    item_id: i32,

    // Records written before barcodes were tracked have no UPC key.
    #[serde(rename = "UPC", default = "manual_upc")]
    upc: i64,
}

impl GroceryItem {
    pub fn new(
        name: impl Into<String>,
        expiry: impl Into<String>,
        quantity: i32,
        item_id: i32,
        upc: i64,
    ) -> Self {
        Self {
            name: name.into(),
            expiry: expiry.into(),
            quantity,
            item_id,
            upc,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Expiry date, kept as the text it was given.
    /// eg. 2024-01-01
    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    pub fn set_expiry(&mut self, expiry: impl Into<String>) {
        self.expiry = expiry.into();
    }

    /// Count on hand
    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }

    pub fn item_id(&self) -> i32 {
        self.item_id
    }

    pub fn set_item_id(&mut self, item_id: i32) {
        self.item_id = item_id;
    }

    /// Barcode number, or [`MANUAL_UPC`] for hand-entered items.
    pub fn upc(&self) -> i64 {
        self.upc
    }

    pub fn set_upc(&mut self, upc: i64) {
        self.upc = upc;
    }

    pub fn is_manual(&self) -> bool {
        self.upc == MANUAL_UPC
    }
}
