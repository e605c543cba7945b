//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use secrecy::SecretString;

pub use platform::rate_limit::RateLimitConfig;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Lifetime of an issued passcode
    pub otp_ttl: Duration,
    /// Verify calls allowed per email within one `otp_ttl` window
    pub verify_attempts_per_email: u32,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Static admin email; `None` disables admin login
    pub admin_email: Option<String>,
    /// Static admin password; `None` disables admin login
    pub admin_password: Option<SecretString>,
    /// Per-origin quota for register/verify/login
    pub rate_limit: RateLimitConfig,
    /// Honour `X-Forwarded-For` when resolving the client origin
    pub trust_forwarded_for: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            otp_ttl: Duration::from_secs(5 * 60),
            verify_attempts_per_email: 5,
            password_pepper: None,
            admin_email: None,
            admin_password: None,
            rate_limit: RateLimitConfig::default(),
            trust_forwarded_for: false,
        }
    }
}

impl AuthConfig {
    /// Local development: generous origin quota
    pub fn development() -> Self {
        Self {
            rate_limit: RateLimitConfig::new(1_000, 3600),
            ..Default::default()
        }
    }

    pub fn otp_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.otp_ttl).unwrap_or(chrono::Duration::minutes(5))
    }

    pub fn otp_valid_for_mins(&self) -> i64 {
        (self.otp_ttl.as_secs() / 60) as i64
    }

    /// Window for the per-email verify guard
    pub fn verify_guard(&self) -> RateLimitConfig {
        RateLimitConfig {
            max_requests: self.verify_attempts_per_email,
            window: self.otp_ttl,
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
