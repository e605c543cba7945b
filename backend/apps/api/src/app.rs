//! Router Assembly
//!
//! Nests the domain routers under `/api`, serves uploaded images and adds
//! the cross-cutting layers.

use std::path::Path;

use axum::http::{HeaderValue, Method, header};
use axum::{Router, routing::get};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const LIVENESS_MESSAGE: &str = "Krishna Jewelry and Readymade API is running...";

/// Domain routers, each with its own state already applied
pub struct ApiRouters {
    pub auth: Router,
    pub admin: Router,
    pub products: Router,
    pub settings: Router,
}

pub fn build_app(routers: ApiRouters, upload_dir: &Path, frontend_origins: &[String]) -> Router {
    let allowed_origins: Vec<HeaderValue> = frontend_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    Router::new()
        .route("/", get(liveness))
        .nest("/api/auth", routers.auth)
        .nest("/api/admin", routers.admin)
        .nest("/api/products", routers.products)
        .nest("/api/settings", routers.settings)
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use auth::infra::mail::{LogOtpMailer, Mailer};
    use auth::infra::memory::InMemoryCustomerRepository;
    use auth::presentation::router::auth_router_generic;
    use auth::{AuthConfig, RateGovernor, admin_router};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use catalog::CatalogConfig;
    use catalog::infra::memory::{
        InMemoryImageStore, InMemoryProductRepository, InMemorySettingsRepository,
    };
    use catalog::presentation::router::{products_router_generic, settings_router_generic};
    use tower::ServiceExt;

    fn app(upload_dir: &Path) -> Router {
        let auth_config = Arc::new(AuthConfig::default());
        let catalog_config = Arc::new(CatalogConfig::default());
        let store = InMemoryImageStore::new("http://localhost:5000");

        let routers = ApiRouters {
            auth: auth_router_generic(
                InMemoryCustomerRepository::new(),
                Mailer::Log(LogOtpMailer),
                RateGovernor::new(&auth_config),
                auth_config.clone(),
            ),
            admin: admin_router(auth_config),
            products: products_router_generic(
                InMemoryProductRepository::new(),
                store.clone(),
                catalog_config.clone(),
            ),
            settings: settings_router_generic(
                InMemorySettingsRepository::new(),
                store,
                catalog_config,
            ),
        };
        build_app(routers, upload_dir, &["http://localhost:5173".to_string()])
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_liveness() {
        let response = app(&std::env::temp_dir()).oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], LIVENESS_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn test_serves_uploads() {
        let dir = std::env::temp_dir().join(format!("api-uploads-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join("1700000000000.jpg"), b"jpeg").await.unwrap();

        let app = app(&dir);
        let response = app
            .clone()
            .oneshot(get("/uploads/1700000000000.jpg"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"jpeg");

        let response = app.oneshot(get("/uploads/missing.jpg")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_cors_preflight_for_frontend() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/products")
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "PUT")
            .body(Body::empty())
            .unwrap();
        let response = app(&std::env::temp_dir()).oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:5173"
        );
    }
}
