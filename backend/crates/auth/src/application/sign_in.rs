//! Sign In Use Case
//!
//! Credential gate for verified customers. Returns the public profile
//! only; no session is issued.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::CustomerRepository;
use crate::domain::value_object::{
    customer_id::CustomerId, customer_name::CustomerName, email::Email,
    phone_number::PhoneNumber, user_password::RawPassword,
};
use crate::error::{AuthError, AuthResult};

pub struct SignInInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct SignInOutput {
    pub customer_id: CustomerId,
    pub name: CustomerName,
    pub email: Email,
    pub phone: PhoneNumber,
}

pub struct SignInUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let email = Email::new(input.email)?;

        let customer = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::NotFound)?;

        if !customer.can_sign_in() {
            return Err(AuthError::NotVerified);
        }

        // Input that could never have been registered cannot match.
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidPassword)?;

        let hash = customer.password.clone();
        let pepper = self.config.password_pepper.clone();
        let password_valid =
            tokio::task::spawn_blocking(move || hash.verify(&raw_password, pepper.as_deref()))
                .await?;

        if !password_valid {
            return Err(AuthError::InvalidPassword);
        }

        tracing::info!(customer_id = %customer.customer_id, "Customer signed in");

        Ok(SignInOutput {
            customer_id: customer.customer_id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
        })
    }
}
