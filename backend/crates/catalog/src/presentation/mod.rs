//! Presentation Layer
//!
//! HTTP handlers, DTOs, multipart reading and routers.

pub mod dto;
pub mod handlers;
pub mod multipart;
pub mod router;

pub use handlers::{ProductsAppState, SettingsAppState};
pub use router::{
    products_router, products_router_generic, settings_router, settings_router_generic,
};
