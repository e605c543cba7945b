//! Catalog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Product and shop settings entities, repository and image store traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory repositories, disk image store
//! - `presentation/` - HTTP handlers, DTOs, multipart reader, routers
//!
//! ## Features
//! - Product create/list/get/update with up to 6 images each
//! - Shop settings (owners, staff, address) with profile photos
//!
//! Uploaded images land in the upload directory and are referenced by
//! their public `/uploads/<file>` URL.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use infra::{DiskImageStore, PgProductRepository, PgSettingsRepository};
pub use presentation::router::{products_router, settings_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::memory::{
        InMemoryImageStore as MemoryImageStore,
        InMemoryProductRepository as MemoryProductStore,
        InMemorySettingsRepository as MemorySettingsStore,
    };
    pub use crate::infra::postgres::{
        PgProductRepository as ProductStore, PgSettingsRepository as SettingsStore,
    };
}

pub mod router {
    pub use crate::presentation::router::*;
}
