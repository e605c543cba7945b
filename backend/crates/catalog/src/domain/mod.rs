//! Domain Layer
//!
//! Core business logic: products, shop settings and image storage seams.

pub mod entity;
pub mod repository;
pub mod storage;

pub use entity::*;
pub use repository::{ProductRepository, SettingsRepository};
pub use storage::{ImageStore, UploadedImage};
