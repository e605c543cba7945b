//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Display strings are the messages the
//! storefront shows to the customer.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Shown when an origin exhausts its request quota
pub const ORIGIN_LIMIT_MESSAGE: &str =
    "Too many requests from this IP, please try again after an hour";

/// Shown when one email exhausts its verification attempts
pub const VERIFY_LIMIT_MESSAGE: &str =
    "Too many verification attempts for this email, please register again to get a new OTP";

#[derive(Debug, Error)]
pub enum AuthError {
    /// Email belongs to a verified account
    #[error("Email already registered.")]
    AlreadyRegistered,

    /// No account for this email
    #[error("User not found.")]
    NotFound,

    /// No outstanding code, or the supplied code differs
    #[error("Invalid OTP.")]
    InvalidCode,

    /// Outstanding code is past its deadline
    #[error("OTP expired.")]
    Expired,

    /// Sign-in before the email was verified
    #[error("Please verify your email first.")]
    NotVerified,

    #[error("Invalid password.")]
    InvalidPassword,

    #[error("Invalid admin credentials")]
    InvalidAdminCredentials,

    #[error("{message}")]
    RateLimited {
        message: &'static str,
        retry_after_secs: u64,
    },

    /// Malformed request input
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn rate_limited(retry_after_secs: u64) -> Self {
        AuthError::RateLimited {
            message: ORIGIN_LIMIT_MESSAGE,
            retry_after_secs,
        }
    }

    pub fn verify_attempts_exhausted(retry_after_secs: u64) -> Self {
        AuthError::RateLimited {
            message: VERIFY_LIMIT_MESSAGE,
            retry_after_secs,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::AlreadyRegistered
            | AuthError::InvalidCode
            | AuthError::Expired
            | AuthError::NotVerified
            | AuthError::InvalidPassword
            | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::NotFound => ErrorKind::NotFound,
            AuthError::InvalidAdminCredentials => ErrorKind::Unauthorized,
            AuthError::RateLimited { .. } => ErrorKind::TooManyRequests,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError; internal causes are not rendered
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Server error. Please try again later.")
            }
            AuthError::RateLimited {
                retry_after_secs, ..
            } => AppError::too_many_requests(self.to_string()).with_retry_after(*retry_after_secs),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidPassword | AuthError::InvalidAdminCredentials => {
                tracing::warn!(error = %self, "Rejected credentials");
            }
            AuthError::RateLimited { message, .. } => {
                tracing::warn!(reason = %message, "Request throttled");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

/// Value-object failures arrive as `AppError`; client-side kinds become
/// validation errors with the same message.
impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.kind().is_client_error() {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}

impl From<platform::rate_limit::RateLimitError> for AuthError {
    fn from(err: platform::rate_limit::RateLimitError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<axum::extract::rejection::JsonRejection> for AuthError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AuthError::Validation(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("blocking task failed: {}", err))
    }
}
