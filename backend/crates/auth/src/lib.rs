//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Customer entity, value objects, repository and mailer traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory repositories, OTP mailers
//! - `presentation/` - HTTP handlers, DTOs, routers, rate governor
//!
//! ## Features
//! - Email registration confirmed by a 6-digit one-time passcode
//! - Password sign-in for verified customers
//! - Static-credential admin sign-in
//!
//! ## Security Model
//! - Passwords hashed with Argon2id on the blocking pool
//! - Passcodes expire after 5 minutes and are compared in constant time
//! - Register/verify/login throttled per client origin
//! - Verify attempts capped per email within one passcode lifetime

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgCustomerRepository;
pub use presentation::middleware::RateGovernor;
pub use presentation::router::{admin_router, auth_router};

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
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::memory::InMemoryCustomerRepository as MemoryCustomerStore;
    pub use crate::infra::postgres::PgCustomerRepository as CustomerStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
