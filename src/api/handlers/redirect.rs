//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::Uri,
    response::{IntoResponse, Redirect},
};
use percent_encoding::{CONTROLS, utf8_percent_encode};

use crate::api::handlers::lookup::{identifier, resolve_original_url};
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// Responds with 307 Temporary Redirect. The stored URL is percent-encoded
/// into a valid `Location` value first.
///
/// # Errors
///
/// Returns 404 Not Found with `{"error": "Short URL Not Found: <id>"}` if the
/// identifier doesn't exist.
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    uri: Uri,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let id = identifier(path, &uri)?;
    let original_url = resolve_original_url(&state, &id).await?;

    Ok(Redirect::temporary(&location(&original_url)))
}

/// Encodes control bytes, DEL and non-ASCII. Existing `%XX` escapes are kept.
fn location(url: &str) -> String {
    utf8_percent_encode(url, CONTROLS).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_location_keeps_plain_urls() {
        let url = "https://example.com/search?q=rust%20lang&page=2#top";
        assert_eq!(location(url), url);
    }

    #[test]
    fn test_location_encodes_control_bytes() {
        let encoded = location("https://example.com/a\u{1}b\u{7f}c\td");

        assert_eq!(encoded, "https://example.com/a%01b%7Fc%09d");
        assert!(HeaderValue::from_str(&encoded).is_ok());
    }

    #[test]
    fn test_location_encodes_non_ascii() {
        assert_eq!(
            location("https://example.com/путь"),
            "https://example.com/%D0%BF%D1%83%D1%82%D1%8C"
        );
    }
}
