//! # darkpoold: darkpool analytics daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`darkpool.toml` + environment overrides)
//! - Install the `tracing` subscriber
//! - Optionally start the console mirror: a headless refresh cycle whose
//!   cards are written to the log
//! - Build the axum router serving the dashboard bundle, bind, and serve
//! - Cancel the refresh cycle and stop on Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;
mod mirror;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let mirror = config
        .dashboard
        .console_mirror
        .then(|| mirror::start(config.refresh_period()));

    let app = darkpool_adapter_http_axum::router::build(&config.dashboard.assets_dir);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, assets_dir = %config.dashboard.assets_dir, "darkpoold listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = mirror {
        handle.cancel();
    }
    tracing::info!("darkpoold stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to listen for Ctrl-C, shutting down");
    }
}
