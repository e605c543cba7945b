pub mod product;
pub mod settings;

pub use product::{InventoryItem, Product, ProductDraft, ProductFields};
pub use settings::{Person, PhotoSlot, ShopSettings};
