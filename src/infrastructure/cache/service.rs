//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching `shortened ID -> original URL` lookups.
///
/// Mappings are immutable once stored, so entries never need invalidation;
/// the TTL only bounds memory use.
///
/// Cache failures should degrade to store lookups rather than fail requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the original URL for a shortened ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss
    async fn get_url(&self, shortened_id: &str) -> CacheResult<Option<String>>;

    /// Stores a lookup result with optional TTL.
    ///
    /// `ttl_seconds = None` applies the implementation's default.
    async fn set_url(
        &self,
        shortened_id: &str,
        original_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short backend name for health reports.
    fn backend(&self) -> &'static str;
}
