//! Register Use Case
//!
//! Issues a one-time passcode for an email: creates the customer, or
//! overwrites an unverified one in place, then emails the code. A fresh
//! code also clears the email's verify attempt window.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::rate_limit::RateLimitStore;

use crate::application::config::AuthConfig;
use crate::application::verify_otp::verify_guard_key;
use crate::domain::entity::customer::{Customer, PendingOtp};
use crate::domain::mailer::{OtpMailer, OtpMessage};
use crate::domain::repository::CustomerRepository;
use crate::domain::value_object::{
    customer_id::CustomerId,
    customer_name::CustomerName,
    email::Email,
    phone_number::PhoneNumber,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

pub struct RegisterInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct RegisterOutput {
    pub customer_id: CustomerId,
    pub email: Email,
    /// An unverified account was overwritten rather than created
    pub resent: bool,
}

pub struct RegisterUseCase<R, M, G>
where
    R: CustomerRepository,
    M: OtpMailer,
    G: RateLimitStore,
{
    repo: Arc<R>,
    mailer: Arc<M>,
    attempts: Arc<G>,
    config: Arc<AuthConfig>,
}

impl<R, M, G> RegisterUseCase<R, M, G>
where
    R: CustomerRepository,
    M: OtpMailer,
    G: RateLimitStore,
{
    pub fn new(
        repo: Arc<R>,
        mailer: Arc<M>,
        attempts: Arc<G>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            repo,
            mailer,
            attempts,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        self.execute_at(input, Utc::now()).await
    }

    pub async fn execute_at(
        &self,
        input: RegisterInput,
        now: DateTime<Utc>,
    ) -> AuthResult<RegisterOutput> {
        let email = Email::new(input.email)?;
        let name = CustomerName::new(&input.name)?;
        let phone = PhoneNumber::new(&input.phone)?;
        let raw_password = RawPassword::new(input.password)?;

        let existing = self.repo.find_by_email(&email).await?;
        if existing.as_ref().is_some_and(|c| c.is_verified) {
            return Err(AuthError::AlreadyRegistered);
        }

        let pepper = self.config.password_pepper.clone();
        let password = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, pepper.as_deref())
        })
        .await??;

        let otp = PendingOtp::issue(now, self.config.otp_ttl_chrono());
        let resent = existing.is_some();
        let customer = match existing {
            Some(mut customer) => {
                customer.reissue(name, phone, password, otp, now)?;
                customer
            }
            None => Customer::register(email, name, phone, password, otp, now),
        };

        self.repo.save(&customer).await?;

        if let Err(e) = self.attempts.reset(&verify_guard_key(&customer.email)).await {
            tracing::warn!(
                customer_id = %customer.customer_id,
                error = %e,
                "Could not clear verify attempts"
            );
        }

        if let Some(pending) = &customer.pending_otp {
            let message = OtpMessage {
                to: &customer.email,
                name: &customer.name,
                code: &pending.code,
                valid_for_mins: self.config.otp_valid_for_mins(),
            };
            // The account is already persisted; a resend recovers from this.
            if let Err(e) = self.mailer.send_otp(message).await {
                tracing::error!(
                    customer_id = %customer.customer_id,
                    error = %e,
                    "OTP email delivery failed"
                );
            }
        }

        tracing::info!(
            customer_id = %customer.customer_id,
            resent,
            "Registration OTP issued"
        );

        Ok(RegisterOutput {
            customer_id: customer.customer_id,
            email: customer.email,
            resent,
        })
    }
}
