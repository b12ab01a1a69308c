use serde::{Deserialize, Serialize};

/// One catalog entry; serde is confined to this module tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "UPC")]
    pub(crate) upc: i64,
    #[serde(rename = "ItemName")]
    pub(crate) name: String,
}

impl Product {
    pub fn new(upc: i64, name: impl Into<String>) -> Self {
        Self {
            upc,
            name: name.into(),
        }
    }

    pub fn upc(&self) -> i64 {
        self.upc
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
