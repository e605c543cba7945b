//! Passcode Delivery
//!
//! The OTP email is the only outbound message; what carries it is an
//! infrastructure choice.

use platform::mail::MailError;

use crate::domain::value_object::{customer_name::CustomerName, email::Email, otp_code::OtpCode};

/// Contents of one passcode email
#[derive(Debug, Clone)]
pub struct OtpMessage<'a> {
    pub to: &'a Email,
    pub name: &'a CustomerName,
    pub code: &'a OtpCode,
    pub valid_for_mins: i64,
}

#[trait_variant::make(OtpMailer: Send)]
pub trait LocalOtpMailer {
    async fn send_otp(&self, message: OtpMessage<'_>) -> Result<(), MailError>;
}
