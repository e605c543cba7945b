//! Value Object Module

pub mod customer_id;
pub mod customer_name;
pub mod email;
pub mod otp_code;
pub mod phone_number;
pub mod user_password;
