//! Multipart Form Reader
//!
//! Buffers a `multipart/form-data` body into text fields and files,
//! enforcing the per-file size cap while streaming chunks.

use std::collections::HashMap;

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;

use crate::domain::storage::UploadedImage;
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy)]
pub struct UploadLimits {
    pub max_files: usize,
    pub max_file_bytes: usize,
    pub max_file_mib: usize,
}

#[derive(Debug, Default)]
pub struct FormData {
    pub fields: HashMap<String, String>,
    pub files: Vec<UploadedImage>,
}

impl FormData {
    /// Remove a text field; missing fields read as empty
    pub fn take(&mut self, name: &str) -> String {
        self.fields.remove(name).unwrap_or_default()
    }
}

fn multipart_error(err: MultipartError) -> CatalogError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        CatalogError::UploadTooLarge
    } else {
        CatalogError::Multipart(err.body_text())
    }
}

pub async fn read_form(multipart: &mut Multipart, limits: UploadLimits) -> CatalogResult<FormData> {
    let mut form = FormData::default();

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();

        let Some(file_name) = field.file_name().map(str::to_string) else {
            let text = field.text().await.map_err(multipart_error)?;
            form.fields.insert(name, text);
            continue;
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            if bytes.len() + chunk.len() > limits.max_file_bytes {
                return Err(CatalogError::ImageTooLarge {
                    max_mib: limits.max_file_mib,
                });
            }
            bytes.extend_from_slice(&chunk);
        }

        // Browsers send an empty part for an untouched file input.
        if file_name.is_empty() && bytes.is_empty() {
            continue;
        }
        if form.files.len() == limits.max_files {
            return Err(CatalogError::TooManyImages {
                max: limits.max_files,
            });
        }

        form.files.push(UploadedImage {
            field_name: name,
            file_name,
            bytes,
        });
    }

    Ok(form)
}
