//! Verify OTP Use Case
//!
//! Checks a supplied passcode against the outstanding one and marks the
//! account verified. Attempts are capped per email so the 6-digit space
//! cannot be walked within one code's lifetime.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::rate_limit::RateLimitStore;

use crate::application::config::AuthConfig;
use crate::domain::repository::CustomerRepository;
use crate::domain::value_object::{customer_id::CustomerId, customer_name::CustomerName, email::Email};
use crate::error::{AuthError, AuthResult};

pub struct VerifyOtpInput {
    pub email: String,
    pub otp: String,
}

#[derive(Debug)]
pub struct VerifyOtpOutput {
    pub customer_id: CustomerId,
    pub name: CustomerName,
    pub email: Email,
}

/// Attempt-guard key shared by verify and register
pub(crate) fn verify_guard_key(email: &Email) -> String {
    format!("verify:{}", email)
}

pub struct VerifyOtpUseCase<R, G>
where
    R: CustomerRepository,
    G: RateLimitStore,
{
    repo: Arc<R>,
    attempts: Arc<G>,
    config: Arc<AuthConfig>,
}

impl<R, G> VerifyOtpUseCase<R, G>
where
    R: CustomerRepository,
    G: RateLimitStore,
{
    pub fn new(repo: Arc<R>, attempts: Arc<G>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            attempts,
            config,
        }
    }

    pub async fn execute(&self, input: VerifyOtpInput) -> AuthResult<VerifyOtpOutput> {
        self.execute_at(input, Utc::now()).await
    }

    pub async fn execute_at(
        &self,
        input: VerifyOtpInput,
        now: DateTime<Utc>,
    ) -> AuthResult<VerifyOtpOutput> {
        let email = Email::new(input.email)?;

        let guard = self
            .attempts
            .check_and_increment(&verify_guard_key(&email), &self.config.verify_guard())
            .await?;
        if !guard.allowed {
            let retry_after = guard.reset_after_secs(Utc::now().timestamp_millis());
            tracing::warn!(email = %email, "Verify attempts exhausted for email");
            return Err(AuthError::verify_attempts_exhausted(retry_after));
        }

        let mut customer = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::NotFound)?;

        customer.verify_otp(&input.otp, now)?;
        self.repo.save(&customer).await?;

        tracing::info!(customer_id = %customer.customer_id, "Customer verified");

        Ok(VerifyOtpOutput {
            customer_id: customer.customer_id,
            name: customer.name,
            email: customer.email,
        })
    }
}
