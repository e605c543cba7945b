//! Catalog Routers

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;

use crate::application::config::CatalogConfig;
use crate::domain::repository::{ProductRepository, SettingsRepository};
use crate::domain::storage::ImageStore;
use crate::infra::{DiskImageStore, PgProductRepository, PgSettingsRepository};
use crate::presentation::handlers::{self, ProductsAppState, SettingsAppState};

/// Product router with the PostgreSQL repository and disk image store
pub fn products_router(
    repo: PgProductRepository,
    store: DiskImageStore,
    config: Arc<CatalogConfig>,
) -> Router {
    products_router_generic(repo, store, config)
}

/// Product router for any repository and image store
pub fn products_router_generic<P, S>(repo: P, store: S, config: Arc<CatalogConfig>) -> Router
where
    P: ProductRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let body_limit = config.product_body_limit();
    let state = ProductsAppState {
        repo: Arc::new(repo),
        store: Arc::new(store),
        config,
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_products::<P, S>).post(handlers::create_product::<P, S>),
        )
        .route(
            "/{id}",
            get(handlers::get_product::<P, S>).put(handlers::update_product::<P, S>),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Shop settings router with the PostgreSQL repository and disk image store
pub fn settings_router(
    repo: PgSettingsRepository,
    store: DiskImageStore,
    config: Arc<CatalogConfig>,
) -> Router {
    settings_router_generic(repo, store, config)
}

/// Shop settings router for any repository and image store
pub fn settings_router_generic<R, S>(repo: R, store: S, config: Arc<CatalogConfig>) -> Router
where
    R: SettingsRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let body_limit = config.settings_body_limit();
    let state = SettingsAppState {
        repo: Arc::new(repo),
        store: Arc::new(store),
        config,
    };

    Router::new()
        .route(
            "/",
            get(handlers::get_settings::<R, S>).post(handlers::save_settings::<R, S>),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
