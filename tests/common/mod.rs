#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use base62_shortener::application::services::ShortenerService;
use base62_shortener::domain::repositories::MappingRepository;
use base62_shortener::infrastructure::cache::{
    CacheError, CacheResult, CacheService, NullCache,
};
use base62_shortener::infrastructure::persistence::InMemoryMappingRepository;
use base62_shortener::routes::app_router;
use base62_shortener::state::AppState;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// Cache backed by a map, with switches for simulating an unreachable backend.
#[derive(Default)]
pub struct MapCache {
    entries: Mutex<HashMap<String, String>>,
    failing: AtomicBool,
}

impl MapCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let cache = Self::default();
        cache.failing.store(true, Ordering::SeqCst);
        cache
    }

    pub async fn insert(&self, shortened_id: &str, original_url: &str) {
        self.entries
            .lock()
            .await
            .insert(shortened_id.to_string(), original_url.to_string());
    }

    pub async fn get(&self, shortened_id: &str) -> Option<String> {
        self.entries.lock().await.get(shortened_id).cloned()
    }

    fn check(&self) -> CacheResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(CacheError::ConnectionError("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CacheService for MapCache {
    async fn get_url(&self, shortened_id: &str) -> CacheResult<Option<String>> {
        self.check()?;
        Ok(self.get(shortened_id).await)
    }

    async fn set_url(
        &self,
        shortened_id: &str,
        original_url: &str,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        self.check()?;
        self.insert(shortened_id, original_url).await;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.check().is_ok()
    }

    fn backend(&self) -> &'static str {
        "map"
    }
}

/// Builds state over an initialized shortener.
pub async fn create_state(
    repository: Arc<dyn MappingRepository>,
    cache: Arc<dyn CacheService>,
) -> AppState {
    let shortener = ShortenerService::new(repository);
    shortener.initialize().await.unwrap();

    AppState::new(Arc::new(shortener), cache)
}

/// Empty in-memory store, caching disabled.
pub async fn create_test_state() -> AppState {
    create_state(Arc::new(InMemoryMappingRepository::new()), Arc::new(NullCache)).await
}

/// In-memory store holding `(original_url, shortened_id)` pairs, caching disabled.
pub async fn create_state_with_mappings(mappings: &[(&str, &str)]) -> AppState {
    let repository = InMemoryMappingRepository::with_mappings(mappings.iter().copied());
    create_state(Arc::new(repository), Arc::new(NullCache)).await
}

/// Full application router, serving the landing page from `public/`.
pub fn test_router(state: AppState) -> Router {
    app_router(state, "public")
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(test_router(state)).unwrap()
}

/// Gives spawned cache writes a chance to run on the test runtime.
pub async fn settle() {
    for _ in 0..50 {
        tokio::task::yield_now().await;
    }
}
