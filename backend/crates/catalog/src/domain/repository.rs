//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use kernel::id::ProductId;

use crate::domain::entity::{product::Product, settings::ShopSettings};
use crate::error::CatalogResult;

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// All products, newest first
    async fn list(&self) -> CatalogResult<Vec<Product>>;

    async fn find_by_id(&self, id: &ProductId) -> CatalogResult<Option<Product>>;

    /// Whether a product other than `excluding` already uses `serial_no`
    async fn serial_no_taken(
        &self,
        serial_no: &str,
        excluding: Option<&ProductId>,
    ) -> CatalogResult<bool>;

    /// Fails with `DuplicateSerialNo` if the serial number is in use
    async fn insert(&self, product: &Product) -> CatalogResult<()>;

    /// Returns `false` when no product has this id
    async fn update(&self, product: &Product) -> CatalogResult<bool>;
}

/// Shop settings repository trait (single record)
#[trait_variant::make(SettingsRepository: Send)]
pub trait LocalSettingsRepository {
    async fn load(&self) -> CatalogResult<Option<ShopSettings>>;

    /// Insert or replace the single record
    async fn save(&self, settings: &ShopSettings) -> CatalogResult<()>;
}
