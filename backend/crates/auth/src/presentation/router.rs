//! Auth Routers

use axum::{Router, middleware, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::mailer::OtpMailer;
use crate::domain::repository::CustomerRepository;
use crate::infra::{mail::Mailer, postgres::PgCustomerRepository};
use crate::presentation::handlers::{self, AdminAppState, AuthAppState};
use crate::presentation::middleware::{RateGovernor, rate_governor};

/// Customer auth router with the PostgreSQL repository and startup mailer
pub fn auth_router(
    repo: PgCustomerRepository,
    mailer: Mailer,
    governor: RateGovernor,
    config: Arc<AuthConfig>,
) -> Router {
    auth_router_generic(repo, mailer, governor, config)
}

/// Customer auth router for any repository and mailer
///
/// Every route is behind the rate governor.
pub fn auth_router_generic<R, M>(
    repo: R,
    mailer: M,
    governor: RateGovernor,
    config: Arc<AuthConfig>,
) -> Router
where
    R: CustomerRepository + Clone + Send + Sync + 'static,
    M: OtpMailer + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        mailer: Arc::new(mailer),
        governor: governor.clone(),
        config,
    };

    Router::new()
        .route("/register", post(handlers::register::<R, M>))
        .route("/verify", post(handlers::verify::<R, M>))
        .route("/login", post(handlers::login::<R, M>))
        .route_layer(middleware::from_fn_with_state(governor, rate_governor))
        .with_state(state)
}

/// Admin router (not throttled)
pub fn admin_router(config: Arc<AuthConfig>) -> Router {
    Router::new()
        .route("/login", post(handlers::admin_login))
        .with_state(AdminAppState { config })
}
