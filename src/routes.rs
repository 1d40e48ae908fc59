//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`               - Landing page (`<public_dir>/index.html`)
//! - `GET /health`         - Health check: store and cache
//! - `GET /shorten/{*url}` - Create a mapping
//! - `GET /check/{id}`     - Inspect a mapping
//! - `GET /{id}`           - Redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//!
//! No path normalization is applied: a trailing slash in `/shorten/...` is
//! part of the URL being shortened.

use std::path::Path;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::services::ServeFile;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `public_dir` - directory holding the static `index.html` landing page
pub fn app_router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    let landing_page = ServeFile::new(public_dir.as_ref().join("index.html"));

    Router::new()
        .route_service("/", landing_page)
        .route("/health", get(health_handler))
        .merge(api::routes::mapping_routes())
        .with_state(state)
        .layer(tracing::layer())
}
