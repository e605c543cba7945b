//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the storefront backend:
//! - Password hashing (Argon2id) with zeroized clear text
//! - In-process fixed-window rate limiting
//! - Client origin extraction
//! - Constant-time comparison
//! - SMTP mail transport

pub mod client;
pub mod crypto;
pub mod mail;
pub mod password;
pub mod rate_limit;
