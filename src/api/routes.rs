//! API route configuration.

use crate::api::handlers::{check_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes backed by the shortening service.
///
/// # Endpoints
///
/// - `GET /shorten/{*url}` - Shorten the URL in the rest of the path
/// - `GET /check/{id}`     - Show the mapping for an identifier
/// - `GET /{id}`           - Redirect to the original URL
pub fn mapping_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten/{*url}", get(shorten_handler))
        .route("/check/{id}", get(check_handler))
        .route("/{id}", get(redirect_handler))
}
