//! One-Time Passcode Value Object
//!
//! A 6-digit numeric code drawn uniformly from `100000..=999999`
//! (900,000 values). The code space is small; expiry and the verify
//! attempt guard carry the security weight.

use std::fmt;

use platform::crypto::constant_time_eq;
use rand::Rng;

pub const OTP_MIN: u32 = 100_000;
pub const OTP_MAX: u32 = 999_999;
pub const OTP_LENGTH: usize = 6;

#[derive(Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn generate() -> Self {
        let code: u32 = rand::rng().random_range(OTP_MIN..=OTP_MAX);
        Self(code.to_string())
    }

    /// Rebuild from a stored value
    pub fn from_db(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Constant-time match against a code supplied by the customer
    ///
    /// Surrounding whitespace is ignored; anything else must match exactly.
    pub fn matches(&self, supplied: &str) -> bool {
        constant_time_eq(self.0.as_bytes(), supplied.trim().as_bytes())
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OtpCode").field(&"[REDACTED]").finish()
    }
}

/// Rendered into the email body only
impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
