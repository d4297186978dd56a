//! Entry point for the Leave Eligibility Engine server.
//!
//! Loads work calendars from the directory named by `LEAVE_ENGINE_CONFIG_DIR`
//! (default `./config`) and serves the JSON API on `LEAVE_ENGINE_BIND_ADDR`
//! (default `127.0.0.1:3000`). Log verbosity follows `RUST_LOG`.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use leave_engine::api::{AppState, create_router};
use leave_engine::config::ConfigLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_dir =
        std::env::var("LEAVE_ENGINE_CONFIG_DIR").unwrap_or_else(|_| "./config".to_string());
    let addr =
        std::env::var("LEAVE_ENGINE_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("Failed to load configuration from {}", config_dir))?;
    info!(
        organization = %config.organization().name,
        years = ?config.years(),
        "Configuration loaded"
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(addr = %addr, "Leave engine listening");

    axum::serve(listener, create_router(AppState::new(config)))
        .await
        .context("Server error")?;

    Ok(())
}
