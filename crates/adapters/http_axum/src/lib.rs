//! # darkpool-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the compiled dashboard bundle (HTML, wasm, CSS) as static files
//! - Fall back to `index.html` for unknown paths so client-side routing works
//! - Expose `/health` for liveness checks
//!
//! Statistics never travel over HTTP: the dashboard generates and refreshes
//! them in the browser. There is no JSON API here.
//!
//! ## Dependency rule
//! Depends on nothing inside the workspace. Never leaks axum types outward.

pub mod router;
