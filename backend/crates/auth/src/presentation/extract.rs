//! Request Extractors

use axum::extract::FromRequest;

use crate::error::AuthError;

/// `Json` whose rejections render as `AuthError::Validation`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AuthError))]
pub struct AppJson<T>(pub T);
