//! Phone Number Value Object
//!
//! Contact number as typed by the customer. Accepts digits with optional
//! leading `+` and the usual separators (space, `-`, `(`, `)`); stored as
//! entered after trimming.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_DIGITS: usize = 6;
const MAX_DIGITS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let phone = raw.as_ref().trim();

        if phone.is_empty() {
            return Err(AppError::bad_request("Phone number is required."));
        }

        let body = phone.strip_prefix('+').unwrap_or(phone);
        if !body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
        {
            return Err(AppError::bad_request("Please enter a valid phone number."));
        }

        let digits = body.chars().filter(char::is_ascii_digit).count();
        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
            return Err(AppError::bad_request("Please enter a valid phone number."));
        }

        Ok(Self(phone.to_string()))
    }

    pub fn from_db(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
