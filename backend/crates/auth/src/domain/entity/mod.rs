//! Entity Module

pub mod customer;

pub use customer::{Customer, PendingOtp};
