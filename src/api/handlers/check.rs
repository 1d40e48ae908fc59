//! Handler for previewing where an identifier leads.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::Uri,
};

use crate::api::dto::mapping::MappingResponse;
use crate::api::handlers::lookup::{identifier, resolve_original_url};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the mapping for an identifier without redirecting.
///
/// Lets users see the destination of a short link before following it.
///
/// # Endpoint
///
/// `GET /check/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn check_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    uri: Uri,
) -> Result<Json<MappingResponse>, AppError> {
    let id = identifier(path, &uri)?;
    let original_url = resolve_original_url(&state, &id).await?;

    Ok(Json(MappingResponse {
        original_url,
        shortened_id: id,
    }))
}
