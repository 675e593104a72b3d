// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use directory_core::domains::auth::{ensure_admin, JwtService};
use directory_core::domains::directory::Directory;
use directory_core::kernel::{open_snapshot_store, Argon2Hasher, ServerDeps};
use directory_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,directory_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Next4Us member directory API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(backend = ?config.storage.backend, "Configuration loaded");

    // Rehydrate the directory
    let store = open_snapshot_store(&config.storage).await?;
    let directory = Directory::open(store, config.admin_email.clone()).await?;
    let password_hasher = Argon2Hasher::default();

    // Seeded before the listener opens
    if let Some(password) = &config.admin_password {
        if let Some(admin) =
            ensure_admin(&directory, &password_hasher, password, &config.admin_phone)
                .await
                .context("Failed to seed administrator")?
        {
            tracing::info!(user_id = %admin.id, "Administrator seeded");
        }
    }

    let deps = ServerDeps::new(
        Arc::new(directory),
        Arc::new(password_hasher),
        Arc::new(JwtService::new(&config.jwt_secret, config.jwt_issuer.clone())),
    );

    // Build application
    let app = build_app(deps, config.allowed_origins.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
