//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 42 mappings" },
///     "cache": { "status": "ok", "message": "redis connected" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let cache_check = check_cache(&state).await;

    let all_healthy = db_check.is_ok() && cache_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            cache: cache_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks store connectivity by counting mappings.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.shortener.record_count().await {
        Ok(count) => CheckStatus::ok(format!("Connected, {} mappings", count)),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    }
}

/// Checks cache connectivity.
async fn check_cache(state: &AppState) -> CheckStatus {
    let backend = state.cache.backend();

    if backend == "disabled" {
        CheckStatus::ok("Caching disabled")
    } else if state.cache.health_check().await {
        CheckStatus::ok(format!("{} connected", backend))
    } else {
        CheckStatus::error(format!("{} connection failed", backend))
    }
}
