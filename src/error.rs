//! Application error type and its HTTP representation.
//!
//! Every failure is rendered as `{"error": "<message>"}`. Store failures are
//! logged here and reach the client only as a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::repositories::StoreError;

/// Message returned to clients for any store failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// JSON body for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or oversized input URL.
    #[error("{0}")]
    Validation(String),

    /// No mapping for the requested identifier.
    #[error("{0}")]
    NotFound(String),

    /// Connectivity or persistence failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn invalid_url(url: &str) -> Self {
        Self::Validation(format!("{} is not a valid URL.", url))
    }

    pub fn not_found(id: &str) -> Self {
        Self::NotFound(format!("Short URL Not Found: {}", id))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(message) | AppError::NotFound(message) => message.clone(),
            AppError::Store(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        Self::Store(StoreError::Database(e))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store(e) => tracing::error!("Store failure: {}", e),
            AppError::Validation(message) => tracing::debug!("Rejected input: {}", message),
            AppError::NotFound(message) => tracing::debug!("{}", message),
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
