//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::{Path, RawQuery, State, rejection::PathRejection},
    http::Uri,
};

use crate::api::dto::mapping::MappingResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens the URL given as the remainder of the path.
///
/// # Endpoint
///
/// `GET /shorten/{*url}`
///
/// The path segment is percent-decoded by the router. A query string on the
/// request belongs to the URL being shortened and is re-attached verbatim, so
/// `GET /shorten/https://example.com/search?q=rust` stores
/// `https://example.com/search?q=rust`.
///
/// # Response
///
/// ```json
/// { "originalURL": "https://example.com/search?q=rust", "shortenedID": "2Bj" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL fails validation or does not decode to
/// UTF-8.
/// Returns 500 Internal Server Error on store failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    RawQuery(query): RawQuery,
    uri: Uri,
) -> Result<Json<MappingResponse>, AppError> {
    let url = match path {
        Ok(Path(url)) => url,
        Err(rejection) => {
            tracing::debug!("Undecodable shorten path: {}", rejection.body_text());
            let raw = uri.path().strip_prefix("/shorten/").unwrap_or(uri.path());
            return Err(AppError::invalid_url(raw));
        }
    };

    let raw_url = match query {
        Some(query) if !query.is_empty() => format!("{}?{}", url, query),
        _ => url,
    };

    let mapping = state.shortener.create(&raw_url).await?;

    Ok(Json(mapping.into()))
}
