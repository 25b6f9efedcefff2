//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Build the top-level axum [`Router`].
///
/// Serves files from `assets_dir`, answering unknown paths with
/// `assets_dir/index.html`. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build(assets_dir: impl AsRef<Path>) -> Router {
    let assets_dir = assets_dir.as_ref();
    tracing::debug!(assets_dir = %assets_dir.display(), "serving dashboard assets");

    let assets = ServeDir::new(assets_dir).fallback(ServeFile::new(assets_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}
