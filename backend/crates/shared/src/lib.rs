//! Shared Kernel - vocabulary shared by every storefront crate
//!
//! This crate holds only what the auth and catalog domains agree on:
//! - The unified error type and its HTTP classification
//! - Typed UUID identifiers for persisted records
//!
//! Anything domain specific belongs in the owning crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
