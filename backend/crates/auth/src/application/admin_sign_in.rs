//! Admin Sign In Use Case
//!
//! Compares the submitted pair against the configured static admin
//! credentials. Both fields are always compared so the response time does
//! not reveal which one was wrong.

use std::sync::Arc;

use platform::crypto::constant_time_eq;
use secrecy::ExposeSecret;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

pub struct AdminSignInInput {
    pub email: String,
    pub password: String,
}

pub struct AdminSignInUseCase {
    config: Arc<AuthConfig>,
}

impl AdminSignInUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, input: AdminSignInInput) -> AuthResult<()> {
        let configured = self
            .config
            .admin_email
            .as_deref()
            .zip(self.config.admin_password.as_ref())
            .filter(|(email, password)| !email.is_empty() && !password.expose_secret().is_empty());

        let Some((email, password)) = configured else {
            tracing::warn!("Admin login attempted but admin credentials are not configured");
            return Err(AuthError::InvalidAdminCredentials);
        };

        let email_ok = constant_time_eq(email.as_bytes(), input.email.as_bytes());
        let password_ok = constant_time_eq(
            password.expose_secret().as_bytes(),
            input.password.as_bytes(),
        );

        if !(email_ok & password_ok) {
            return Err(AuthError::InvalidAdminCredentials);
        }

        tracing::info!("Admin signed in");
        Ok(())
    }
}
