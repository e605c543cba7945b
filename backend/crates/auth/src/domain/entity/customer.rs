//! Customer Entity
//!
//! A storefront customer account. Created or overwritten in place on
//! registration, flipped to verified by a correct OTP, never hard-deleted.

use chrono::{DateTime, Duration, Utc};

use crate::domain::value_object::{
    customer_id::CustomerId, customer_name::CustomerName, email::Email, otp_code::OtpCode,
    phone_number::PhoneNumber, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// Outstanding passcode and its deadline
///
/// Held as a unit so a code can never exist without an expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOtp {
    pub code: OtpCode,
    pub expires_at: DateTime<Utc>,
}

impl PendingOtp {
    pub fn issue(now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            code: OtpCode::generate(),
            expires_at: now + ttl,
        }
    }

    /// Strictly after the deadline; `now == expires_at` is still valid
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub email: Email,
    pub name: CustomerName,
    pub phone: PhoneNumber,
    pub password: UserPassword,
    pub is_verified: bool,
    pub pending_otp: Option<PendingOtp>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// First registration for an email
    pub fn register(
        email: Email,
        name: CustomerName,
        phone: PhoneNumber,
        password: UserPassword,
        otp: PendingOtp,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            customer_id: CustomerId::new(),
            email,
            name,
            phone,
            password,
            is_verified: false,
            pending_otp: Some(otp),
            created_at: now,
            updated_at: now,
        }
    }

    /// Repeat registration before verification: replace the profile and
    /// issue a new code. The id and creation time are kept.
    pub fn reissue(
        &mut self,
        name: CustomerName,
        phone: PhoneNumber,
        password: UserPassword,
        otp: PendingOtp,
        now: DateTime<Utc>,
    ) -> AuthResult<()> {
        if self.is_verified {
            return Err(AuthError::AlreadyRegistered);
        }
        self.name = name;
        self.phone = phone;
        self.password = password;
        self.pending_otp = Some(otp);
        self.updated_at = now;
        Ok(())
    }

    /// Consume the pending code
    ///
    /// An expired code is rejected as expired whatever was supplied; a
    /// missing or different code is rejected as invalid. On success the
    /// account is verified and the code cleared.
    pub fn verify_otp(&mut self, supplied: &str, now: DateTime<Utc>) -> AuthResult<()> {
        let pending = self.pending_otp.as_ref().ok_or(AuthError::InvalidCode)?;

        if pending.is_expired(now) {
            return Err(AuthError::Expired);
        }

        if !pending.code.matches(supplied) {
            return Err(AuthError::InvalidCode);
        }

        self.is_verified = true;
        self.pending_otp = None;
        self.updated_at = now;
        Ok(())
    }

    pub fn can_sign_in(&self) -> bool {
        self.is_verified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    fn customer(now: DateTime<Utc>) -> Customer {
        Customer::register(
            Email::new("alice@example.com").unwrap(),
            CustomerName::new("Alice").unwrap(),
            PhoneNumber::new("9990000000").unwrap(),
            UserPassword::from_raw(&RawPassword::new("secret123".to_string()).unwrap(), None)
                .unwrap(),
            PendingOtp {
                code: OtpCode::from_db("123456"),
                expires_at: now + Duration::minutes(5),
            },
            now,
        )
    }

    #[test]
    fn test_new_customer_is_unverified_with_code() {
        let now = Utc::now();
        let c = customer(now);
        assert!(!c.is_verified);
        assert!(!c.can_sign_in());
        assert!(c.pending_otp.is_some());
    }

    #[test]
    fn test_verify_otp_success_clears_code() {
        let now = Utc::now();
        let mut c = customer(now);
        c.verify_otp("123456", now + Duration::minutes(1)).unwrap();
        assert!(c.is_verified);
        assert!(c.pending_otp.is_none());

        let err = c.verify_otp("123456", now).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCode));
    }

    #[test]
    fn test_verify_otp_wrong_code() {
        let now = Utc::now();
        let mut c = customer(now);
        assert!(matches!(
            c.verify_otp("654321", now),
            Err(AuthError::InvalidCode)
        ));
        assert!(!c.is_verified);
        assert!(c.pending_otp.is_some());
    }

    #[test]
    fn test_verify_otp_expiry_boundary() {
        let now = Utc::now();

        let mut at_deadline = customer(now);
        assert!(at_deadline.verify_otp("123456", now + Duration::minutes(5)).is_ok());

        let mut late = customer(now);
        let after = now + Duration::minutes(5) + Duration::milliseconds(1);
        assert!(matches!(late.verify_otp("123456", after), Err(AuthError::Expired)));

        let mut late_wrong = customer(now);
        assert!(matches!(
            late_wrong.verify_otp("000000", after),
            Err(AuthError::Expired)
        ));
    }

    #[test]
    fn test_reissue_keeps_identity() {
        let now = Utc::now();
        let mut c = customer(now);
        let id = c.customer_id;
        let password = c.password.clone();

        c.reissue(
            CustomerName::new("Alice B").unwrap(),
            PhoneNumber::new("9990000001").unwrap(),
            password,
            PendingOtp::issue(now, Duration::minutes(5)),
            now + Duration::seconds(30),
        )
        .unwrap();

        assert_eq!(c.customer_id, id);
        assert_eq!(c.name.as_str(), "Alice B");
        assert_eq!(c.created_at, now);
    }

    #[test]
    fn test_reissue_rejected_once_verified() {
        let now = Utc::now();
        let mut c = customer(now);
        c.verify_otp("123456", now).unwrap();

        let password = c.password.clone();
        let err = c
            .reissue(
                CustomerName::new("Mallory").unwrap(),
                PhoneNumber::new("9990000002").unwrap(),
                password,
                PendingOtp::issue(now, Duration::minutes(5)),
                now,
            )
            .unwrap_err();
        assert!(matches!(err, AuthError::AlreadyRegistered));
        assert_eq!(c.name.as_str(), "Alice");
    }
}
