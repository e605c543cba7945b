//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request errors are rendered by
//! the domain crates.

mod app;
mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::infra::mail::{LogOtpMailer, Mailer, SmtpOtpMailer};
use auth::{PgCustomerRepository, RateGovernor, admin_router, auth_router};
use catalog::{
    DiskImageStore, PgProductRepository, PgSettingsRepository, products_router, settings_router,
};
use platform::mail::SmtpMailer;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{ApiRouters, build_app};
use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // OTP delivery
    let mailer = match &config.mail {
        Some(mail_config) => {
            tracing::info!(
                smtp_host = %mail_config.smtp_host,
                smtp_port = mail_config.smtp_port,
                "SMTP mailer configured"
            );
            Mailer::Smtp(SmtpOtpMailer::new(SmtpMailer::new(mail_config)?))
        }
        None => {
            tracing::warn!("EMAIL_USER/EMAIL_PASS not set; OTP codes will only be logged");
            Mailer::Log(LogOtpMailer)
        }
    };

    if config.auth.admin_email.is_none() || config.auth.admin_password.is_none() {
        tracing::warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set; admin login is disabled");
    }

    // Rate governor and its background sweep
    let governor = RateGovernor::new(&config.auth);
    let sweeper = governor.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweeper.sweep_interval());
        loop {
            interval.tick().await;
            let removed = sweeper.sweep_expired(chrono::Utc::now().timestamp_millis());
            if removed > 0 {
                tracing::debug!(windows_removed = removed, "Rate limit sweep completed");
            }
        }
    });

    // Image uploads
    let image_store = DiskImageStore::from_config(&config.catalog);
    image_store.ensure_dir().await?;
    tracing::info!(upload_dir = %image_store.dir().display(), "Upload directory ready");

    let auth_config = Arc::new(config.auth);
    let catalog_config = Arc::new(config.catalog);

    // Build router
    let routers = ApiRouters {
        auth: auth_router(
            PgCustomerRepository::new(pool.clone()),
            mailer,
            governor,
            auth_config.clone(),
        ),
        admin: admin_router(auth_config),
        products: products_router(
            PgProductRepository::new(pool.clone()),
            image_store.clone(),
            catalog_config.clone(),
        ),
        settings: settings_router(
            PgSettingsRepository::new(pool),
            image_store.clone(),
            catalog_config.clone(),
        ),
    };
    let app = build_app(routers, image_store.dir(), &config.frontend_origins);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
