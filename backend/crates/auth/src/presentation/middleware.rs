//! Request-Rate Governor
//!
//! Per-origin fixed-window throttle for the register/verify/login routes,
//! plus the per-email verify attempt counter the verify use case consults.
//! Every response from a governed route carries `RateLimit-Limit`,
//! `RateLimit-Remaining` and `RateLimit-Reset` (seconds).

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use platform::client::{extract_client_ip, origin_key};
use platform::rate_limit::{InMemoryRateLimitStore, RateLimitConfig, RateLimitResult};

use crate::application::config::AuthConfig;
use crate::error::AuthError;

pub const RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("ratelimit-limit");
pub const RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("ratelimit-remaining");
pub const RATELIMIT_RESET: HeaderName = HeaderName::from_static("ratelimit-reset");

/// Shared throttle state, constructed once and injected into the routers
#[derive(Clone)]
pub struct RateGovernor {
    origins: Arc<InMemoryRateLimitStore>,
    verify_attempts: Arc<InMemoryRateLimitStore>,
    origin_limit: RateLimitConfig,
    verify_limit: RateLimitConfig,
    trust_forwarded_for: bool,
}

impl RateGovernor {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            origins: Arc::new(InMemoryRateLimitStore::new()),
            verify_attempts: Arc::new(InMemoryRateLimitStore::new()),
            origin_limit: config.rate_limit.clone(),
            verify_limit: config.verify_guard(),
            trust_forwarded_for: config.trust_forwarded_for,
        }
    }

    pub fn verify_attempts(&self) -> Arc<InMemoryRateLimitStore> {
        self.verify_attempts.clone()
    }

    /// How often the background sweep should run
    pub fn sweep_interval(&self) -> Duration {
        self.origin_limit.window.min(self.verify_limit.window)
    }

    /// Drop elapsed windows from both counters
    pub fn sweep_expired(&self, now_ms: i64) -> usize {
        self.origins.sweep_expired(&self.origin_limit, now_ms)
            + self.verify_attempts.sweep_expired(&self.verify_limit, now_ms)
    }

    fn check(&self, key: &str, now_ms: i64) -> Option<RateLimitResult> {
        match self.origins.check_at(key, &self.origin_limit, now_ms) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::error!(error = %e, "Rate governor unavailable; admitting request");
                None
            }
        }
    }
}

/// Middleware for the governed auth routes
pub async fn rate_governor(
    State(governor): State<RateGovernor>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let direct_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());
    let client_ip = extract_client_ip(req.headers(), direct_ip, governor.trust_forwarded_for);
    let key = origin_key(client_ip);

    let now_ms = Utc::now().timestamp_millis();
    let Some(result) = governor.check(&key, now_ms) else {
        return next.run(req).await;
    };
    let reset_secs = result.reset_after_secs(now_ms);

    let mut response = if result.allowed {
        next.run(req).await
    } else {
        tracing::warn!(origin = %key, path = %req.uri().path(), "Origin over request quota");
        AuthError::rate_limited(reset_secs).into_response()
    };

    apply_rate_limit_headers(response.headers_mut(), &result, reset_secs);
    response
}

fn apply_rate_limit_headers(headers: &mut HeaderMap, result: &RateLimitResult, reset_secs: u64) {
    headers.insert(RATELIMIT_LIMIT, HeaderValue::from(result.limit));
    headers.insert(RATELIMIT_REMAINING, HeaderValue::from(result.remaining));
    headers.insert(RATELIMIT_RESET, HeaderValue::from(reset_secs));
}
