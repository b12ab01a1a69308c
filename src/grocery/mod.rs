mod item;
mod legacy;

pub use item::{GroceryItem, MANUAL_UPC};
pub use legacy::LegacyItem;
