//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache for identifier lookups.
///
/// Uses `ConnectionManager` for automatic reconnection and connection reuse.
/// Reads and writes are fail-open: errors are logged and reported as misses
/// or successful no-ops.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures the default TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set_url`] is
    ///   called with `ttl_seconds = None`; set via `CACHE_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "shortid:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, shortened_id: &str) -> String {
        format!("{}{}", self.key_prefix, shortened_id)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_url(&self, shortened_id: &str) -> CacheResult<Option<String>> {
        let key = self.build_key(shortened_id);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(url)) => {
                debug!("Cache HIT: {} -> {}", shortened_id, url);
                Ok(Some(url))
            }
            Ok(None) => {
                debug!("Cache MISS: {}", shortened_id);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", shortened_id, e);
                Ok(None)
            }
        }
    }

    async fn set_url(
        &self,
        shortened_id: &str,
        original_url: &str,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let key = self.build_key(shortened_id);
        let mut conn = self.client.clone();
        let ttl_seconds = ttl_seconds.unwrap_or(self.default_ttl);

        match conn
            .set_ex::<_, _, ()>(&key, original_url, ttl_seconds)
            .await
        {
            Ok(_) => {
                debug!(
                    "Cache SET: {} -> {} (TTL: {}s)",
                    shortened_id, original_url, ttl_seconds
                );
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", shortened_id, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
