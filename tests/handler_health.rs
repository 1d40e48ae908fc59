mod common;

use async_trait::async_trait;
use base62_shortener::application::services::ShortenerService;
use base62_shortener::domain::entities::{NewMapping, UrlMapping};
use base62_shortener::domain::repositories::{MappingRepository, StoreError};
use base62_shortener::infrastructure::persistence::InMemoryMappingRepository;
use base62_shortener::state::AppState;
use serde_json::Value;
use std::sync::Arc;

struct UnreachableRepository;

#[async_trait]
impl MappingRepository for UnreachableRepository {
    async fn count_records(&self) -> Result<i64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn insert(&self, _new_mapping: NewMapping) -> Result<UrlMapping, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_shortened_id(&self, _id: &str) -> Result<Option<UrlMapping>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

#[tokio::test]
async fn test_health_check() {
    let state = common::create_state_with_mappings(&[("https://example.com", "2Bj")]).await;
    let server = common::test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["database"]["message"], "Connected, 1 mappings");
    assert_eq!(body["checks"]["cache"]["message"], "Caching disabled");
}

#[tokio::test]
async fn test_health_reports_failing_cache() {
    let state = common::create_state(
        Arc::new(InMemoryMappingRepository::new()),
        Arc::new(common::MapCache::failing()),
    )
    .await;
    let server = common::test_server(state);

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);
    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["cache"]["status"], "error");
}

#[tokio::test]
async fn test_health_reports_failing_store() {
    let repository: Arc<dyn MappingRepository> = Arc::new(UnreachableRepository);
    let state = AppState::new(
        Arc::new(ShortenerService::new(repository)),
        Arc::new(common::MapCache::new()),
    );
    let server = common::test_server(state);

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);
    let body: Value = response.json();
    assert_eq!(body["checks"]["database"]["status"], "error");
    assert_eq!(body["checks"]["cache"]["status"], "ok");
}

#[tokio::test]
async fn test_store_failure_hides_details_from_client() {
    let repository: Arc<dyn MappingRepository> = Arc::new(UnreachableRepository);
    let state = AppState::new(
        Arc::new(ShortenerService::new(repository)),
        Arc::new(common::MapCache::new()),
    );
    let server = common::test_server(state);

    let response = server.get("/check/2Bj").await;

    assert_eq!(response.status_code(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"], "Internal server error");
}
