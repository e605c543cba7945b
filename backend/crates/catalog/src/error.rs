//! Catalog Error Types
//!
//! Catalog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Image extensions accepted for product and profile photos
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "avif"];

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Missing product, or an id that is not a product id
    #[error("Product not found")]
    ProductNotFound,

    #[error("This Serial Number is already assigned to another product.")]
    DuplicateSerialNo,

    /// Malformed form input
    #[error("{0}")]
    Validation(String),

    #[error("At most {max} images can be uploaded at once")]
    TooManyImages { max: usize },

    #[error("Each image must be {max_mib} MB or smaller")]
    ImageTooLarge { max_mib: usize },

    /// Request body exceeded the route's body limit
    #[error("Upload is too large")]
    UploadTooLarge,

    #[error("Unsupported image type for '{0}' (allowed: jpg, jpeg, png, gif, webp, avif)")]
    UnsupportedImage(String),

    #[error("Malformed upload: {0}")]
    Multipart(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::DuplicateSerialNo
            | CatalogError::Validation(_)
            | CatalogError::TooManyImages { .. }
            | CatalogError::UnsupportedImage(_)
            | CatalogError::Multipart(_) => ErrorKind::BadRequest,
            CatalogError::ProductNotFound => ErrorKind::NotFound,
            CatalogError::ImageTooLarge { .. } | CatalogError::UploadTooLarge => {
                ErrorKind::PayloadTooLarge
            }
            CatalogError::Storage(_) | CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError; internal causes are not rendered
    pub fn to_app_error(&self) -> AppError {
        match self.kind() {
            ErrorKind::InternalServerError => {
                AppError::internal("Server error. Please try again later.")
            }
            kind => AppError::new(kind, self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Storage(e) => {
                tracing::error!(error = %e, "Image storage error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

/// Unique violations can only come from `products.serial_no`
impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("23505") {
                return CatalogError::DuplicateSerialNo;
            }
        }
        CatalogError::Database(err)
    }
}
