//! Application Configuration
//!
//! Configuration for the Catalog application layer.

use std::path::PathBuf;

const MIB: usize = 1024 * 1024;

/// Catalog application configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Directory uploaded images are written to
    pub upload_dir: PathBuf,
    /// Origin prefixed to `/uploads/<file>` in stored image URLs
    pub public_base_url: String,
    /// Images accepted per product
    pub max_images: usize,
    /// Size cap per uploaded file
    pub max_image_bytes: usize,
    /// Profile photos accepted per settings save
    pub max_profile_photos: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            public_base_url: "http://localhost:5000".to_string(),
            max_images: 6,
            max_image_bytes: 5 * MIB,
            max_profile_photos: 20,
        }
    }
}

impl CatalogConfig {
    /// Local development: uploads under a scratch directory
    pub fn development() -> Self {
        Self {
            upload_dir: std::env::temp_dir().join("krishna-jewelry-uploads"),
            ..Default::default()
        }
    }

    pub fn max_image_mib(&self) -> usize {
        self.max_image_bytes.div_ceil(MIB)
    }

    /// Body limit for product create/update: every image plus form text
    pub fn product_body_limit(&self) -> usize {
        self.max_images * self.max_image_bytes + MIB
    }

    /// Body limit for a settings save
    pub fn settings_body_limit(&self) -> usize {
        self.max_profile_photos * self.max_image_bytes + MIB
    }
}
