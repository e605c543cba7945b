//! Image Storage
//!
//! Uploaded images are written by an `ImageStore` and referenced by the
//! public URL it returns.

use crate::error::{ALLOWED_IMAGE_EXTENSIONS, CatalogError, CatalogResult};

/// One uploaded file, fully buffered
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Multipart field the file arrived under
    pub field_name: String,
    /// Client-side file name; only its extension is kept
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    /// Lowercased extension with the leading dot, e.g. `.jpg`
    pub fn extension(&self) -> CatalogResult<String> {
        image_extension(&self.file_name)
    }
}

/// Check the file name carries an accepted image extension
pub fn image_extension(file_name: &str) -> CatalogResult<String> {
    let ext = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .ok_or_else(|| CatalogError::UnsupportedImage(file_name.to_string()))?;
    Ok(format!(".{}", ext))
}

/// Image store trait
#[trait_variant::make(ImageStore: Send)]
pub trait LocalImageStore {
    /// Persist `bytes` under a fresh name starting with `prefix` and
    /// return the public URL
    async fn save(&self, prefix: &str, image: &UploadedImage) -> CatalogResult<String>;
}
