mod config;
mod currency;
mod errors;
mod integrations;
mod jobs;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::integrations::client::HttpIntegrationSync;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobtrack API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize integration sync client
    let sync = HttpIntegrationSync::new(
        config.sync_service_url.clone(),
        config.sync_api_key.clone(),
    )
    .context("Failed to build integration sync client")?;
    info!("Integration sync client initialized ({})", config.sync_service_url);

    let state = AppState {
        sync: Arc::new(sync),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins to the web client's domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `<crate>=<level>`, keyed on the crate root module so it matches the targets
/// of events emitted from this binary regardless of the package name.
fn default_log_directive(level: &str) -> String {
    format!("{}={}", module_path!(), level)
}
