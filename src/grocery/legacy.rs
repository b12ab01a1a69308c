use serde::{Deserialize, Serialize};

use super::{GroceryItem, MANUAL_UPC};

/// First version of the item record, from before UPCs were tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyItem {
    #[serde(rename = "ItemName")]
    name: String,
    #[serde(rename = "ExpireDate")]
    expiry: String,
    #[serde(rename = "ItemCount")]
    quantity: i32,
    #[serde(rename = "ItemID")]
    item_id: i32,
}

impl LegacyItem {
    pub fn new(name: impl Into<String>, expiry: impl Into<String>, quantity: i32, item_id: i32) -> Self {
        Self {
            name: name.into(),
            expiry: expiry.into(),
            quantity,
            item_id,
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

    /// Identifier
    pub fn item_id(&self) -> i32 {
        self.item_id
    }

    pub fn set_item_id(&mut self, item_id: i32) {
        self.item_id = item_id;
    }
}

/// Old records have no barcode, so they migrate as manual items.
impl From<LegacyItem> for GroceryItem {
    fn from(item: LegacyItem) -> Self {
        GroceryItem::new(item.name, item.expiry, item.quantity, item.item_id, MANUAL_UPC)
    }
}
