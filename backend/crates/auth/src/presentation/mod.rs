//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::{AdminAppState, AuthAppState};
pub use middleware::{RateGovernor, rate_governor};
pub use router::{admin_router, auth_router, auth_router_generic};
