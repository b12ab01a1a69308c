pub mod catalog;
pub mod config;
pub mod grocery;
pub mod pantry;

pub use catalog::{CatalogError, Product, ProductCatalog};
pub use config::{ConfigError, Settings};
pub use grocery::{GroceryItem, LegacyItem, MANUAL_UPC};
pub use pantry::{ItemUpdateBatch, ManualBatch, Pantry, PantryError, ScannedBatch};
