use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use portal_api::auth::JwtSessionResolver;
use portal_api::config;
use portal_api::database::{DatabaseManager, PgPortalStore};
use portal_api::{app, routes, AppState};

/// Real-estate portal API server
#[derive(Debug, Parser)]
#[command(name = "portal-api", version, about)]
struct Cli {
    /// Bind host, overrides PORTAL_API_HOST
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides PORTAL_API_PORT / PORT
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and PORTAL_JWT_SECRET
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portal_api=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::config();
    tracing::info!("Starting portal API in {:?} mode", config.environment);

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to the database")?;

    let sessions = JwtSessionResolver::new(&config.security.jwt_secret, config.security.session_cookie_name.clone())
        .context("PORTAL_JWT_SECRET must be set")?;

    let state = AppState::new(Arc::new(PgPortalStore::new(pool)), Arc::new(sessions));

    let mut router = app(state);
    if let Some(cors) = routes::cors_layer(&config.security) {
        router = router.layer(cors);
    }

    let host = cli.host.unwrap_or_else(|| config.server.host.clone());
    let port = cli.port.unwrap_or(config.server.port);
    let bind_addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Portal API listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
