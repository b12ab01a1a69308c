mod models;

use std::{collections::HashMap, fs, path::Path};

use tracing::debug;

pub use models::Product; // Re-export the model type to callers.

/// Lookup table from UPC to display name, used to name scanned items.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    names: HashMap<i64, String>,
}

// ---- Constructors (serde hidden from callers) ----

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = Self::from_json_str(&data)?;
        debug!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Load from a JSON array of `{ "UPC": .., "ItemName": .. }`.
    ///
    /// Later entries win when a UPC appears twice.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let parsed: Vec<Product> = serde_json::from_str(json).map_err(CatalogError::Json)?;
        Ok(parsed.into_iter().collect())
    }

    /// Load from a file whose path is held in an env var.
    pub fn from_env(var: &str) -> Result<Self, CatalogError> {
        let path = std::env::var(var).map_err(|_| CatalogError::MissingEnv(var.to_string()))?;
        Self::from_file(path)
    }

    pub fn insert(&mut self, product: Product) {
        self.names.insert(product.upc, product.name);
    }

    pub fn name_for(&self, upc: i64) -> Option<&str> {
        self.names.get(&upc).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<Product> for ProductCatalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for product in iter {
            catalog.insert(product);
        }
        catalog
    }
}

/// ---- Errors ----
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("missing env var: {0}")]
    MissingEnv(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
