//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`            - Health check (logo store, contact relay)
//! - `/api/*`                  - Logo proxy, logo persister, contact relay
//! - `GET  /logos/{filename}`  - Persisted logos, served from disk
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::domain::logo_filename::LOGOS_URL_PREFIX;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the routes and middleware without path normalization.
///
/// `logos_dir` is the directory the persister writes to; its files are served
/// under `/logos`.
pub fn build_router(state: AppState, logos_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service(LOGOS_URL_PREFIX, ServeDir::new(logos_dir))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, logos_dir: &Path) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, logos_dir))
}
