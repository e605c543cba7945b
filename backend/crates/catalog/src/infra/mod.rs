//! Infrastructure Layer
//!
//! PostgreSQL and in-memory repositories, disk and in-memory image stores.

pub mod disk;
pub mod memory;
pub mod postgres;

pub use disk::DiskImageStore;
pub use memory::{InMemoryImageStore, InMemoryProductRepository, InMemorySettingsRepository};
pub use postgres::{PgProductRepository, PgSettingsRepository};
