//! Cache-aside identifier resolution shared by `/check` and redirect handlers.

use axum::extract::{Path, rejection::PathRejection};
use axum::http::Uri;
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;

/// Takes the identifier out of the path.
///
/// An identifier that does not decode to UTF-8 cannot exist in the store, so
/// the rejection becomes [`AppError::NotFound`] for the raw last segment.
pub fn identifier(
    path: Result<Path<String>, PathRejection>,
    uri: &Uri,
) -> Result<String, AppError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            debug!("Undecodable identifier: {}", rejection.body_text());
            let raw = uri.path().rsplit('/').next().unwrap_or_default();
            Err(AppError::not_found(raw))
        }
    }
}

/// Resolves a shortened ID to its original URL.
///
/// # Cache Strategy
///
/// - **Cache hit**: returned directly
/// - **Cache miss**: query the store, write the cache in a spawned task
/// - **Cache error**: log and fall back to the store
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if the identifier has no mapping.
/// Returns [`AppError::Store`] on database errors.
pub async fn resolve_original_url(state: &AppState, id: &str) -> Result<String, AppError> {
    match state.cache.get_url(id).await {
        Ok(Some(cached_url)) => {
            debug!("Cache HIT for {}", id);
            Ok(cached_url)
        }
        Ok(None) => {
            debug!("Cache MISS for {}", id);

            let mapping = state.shortener.read(id).await?;

            let cache = state.cache.clone();
            let key = mapping.shortened_id.clone();
            let url = mapping.original_url.clone();
            tokio::spawn(async move {
                if let Err(e) = cache.set_url(&key, &url, None).await {
                    error!("Failed to cache URL: {}", e);
                }
            });

            Ok(mapping.original_url)
        }
        Err(e) => {
            error!("Cache error: {}", e);

            let mapping = state.shortener.read(id).await?;
            Ok(mapping.original_url)
        }
    }
}
