//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::cache::CacheService;

/// Shortener bound to a type-erased store, so production and tests share one state type.
pub type DynShortenerService = ShortenerService<dyn MappingRepository>;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<DynShortenerService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Builds state around an already initialized shortener.
    pub fn new(shortener: Arc<DynShortenerService>, cache: Arc<dyn CacheService>) -> Self {
        Self { shortener, cache }
    }
}
