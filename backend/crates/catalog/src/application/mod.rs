//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod products;
pub mod settings;

// Re-exports
pub use config::CatalogConfig;
pub use products::{
    CreateProductUseCase, GetProductUseCase, ListProductsUseCase, ProductInput,
    UpdateProductUseCase,
};
pub use settings::{GetSettingsUseCase, SaveSettingsInput, SaveSettingsUseCase};
