//! Server Configuration
//!
//! Everything the binary reads from the environment, collected once at
//! startup. Blank variables count as unset.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use auth::AuthConfig;
use catalog::CatalogConfig;
use platform::mail::MailConfig;
use platform::rate_limit::RateLimitConfig;
use secrecy::SecretString;

pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub frontend_origins: Vec<String>,
    /// `None` when `EMAIL_USER`/`EMAIL_PASS` are not both set
    pub mail: Option<MailConfig>,
    pub auth: AuthConfig,
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;
        let port = parse_or(&var, "PORT", 5000u16)?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let mail = match (var("EMAIL_USER"), var("EMAIL_PASS")) {
            (Some(user), Some(pass)) => {
                let mut mail = MailConfig::new(user, SecretString::from(pass));
                if let Some(host) = var("SMTP_HOST") {
                    mail.smtp_host = host;
                }
                mail.smtp_port = parse_or(&var, "SMTP_PORT", mail.smtp_port)?;
                Some(mail)
            }
            _ => None,
        };

        let base = AuthConfig::default();
        let auth = AuthConfig {
            password_pepper: var("PASSWORD_PEPPER").map(String::into_bytes),
            admin_email: var("ADMIN_EMAIL").map(|email| email.trim().to_string()),
            admin_password: var("ADMIN_PASSWORD").map(SecretString::from),
            rate_limit: RateLimitConfig::new(
                parse_or(&var, "RATE_LIMIT_MAX", base.rate_limit.max_requests)?,
                parse_or(&var, "RATE_LIMIT_WINDOW_SECS", base.rate_limit.window.as_secs())?,
            ),
            trust_forwarded_for: parse_flag(&var, "TRUST_FORWARDED_FOR")?,
            ..base
        };

        let catalog = CatalogConfig {
            upload_dir: var("UPLOAD_DIR")
                .map(Into::into)
                .unwrap_or_else(|| CatalogConfig::default().upload_dir),
            public_base_url: var("PUBLIC_BASE_URL")
                .unwrap_or_else(|| format!("http://localhost:{}", port)),
            ..CatalogConfig::default()
        };

        Ok(Self {
            database_url,
            port,
            frontend_origins,
            mail,
            auth,
            catalog,
        })
    }
}

fn parse_or<T, F>(var: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{} is invalid: {}", key, e)),
        None => Ok(default),
    }
}

fn parse_flag<F>(var: &F, key: &str) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match var(key).map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("false" | "0" | "no") => Ok(false),
        Some("true" | "1" | "yes") => Ok(true),
        Some(other) => bail!("{} must be true or false, got '{}'", key, other),
    }
}
