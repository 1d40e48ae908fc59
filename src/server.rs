//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, counter seeding, and the Axum
//! server lifecycle.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::PgMappingRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Startup order:
/// - PostgreSQL connection pool (with bounded retry)
/// - Apply migrations
/// - Redis cache (or NullCache fallback)
/// - Seed the identifier counter from the stored mapping count
/// - Axum HTTP server
///
/// The listener is bound only after the counter is seeded, so no request can
/// observe an unseeded counter.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Counting stored mappings fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_database(&config)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let cache = connect_cache(&config).await;

    let repository: Arc<dyn MappingRepository> = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    let shortener = Arc::new(ShortenerService::new(repository));

    let count = shortener
        .initialize()
        .await
        .context("Failed to read mapping count from the store")?;
    tracing::info!("Shortened URLs in database: {}", count);

    let state = AppState::new(shortener, cache);
    let app = app_router(state, &config.public_dir);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr()))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds pool options from the `DB_*` settings.
pub fn pool_options(config: &Config) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
}

/// Connects the pool, retrying with jittered exponential backoff.
///
/// Makes `db_connect_retries + 1` attempts in total (200ms, 400ms, ... up to
/// 5s apart) before returning the last error.
pub async fn connect_database(config: &Config) -> Result<PgPool, sqlx::Error> {
    let strategy = ExponentialBackoff::from_millis(2)
        .factor(100)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.db_connect_retries);

    Retry::start(strategy, || async {
        pool_options(config)
            .connect(&config.database_url)
            .await
            .inspect_err(|e| tracing::warn!("Database connection attempt failed: {}", e))
    })
    .await
}

/// Connects Redis if configured, degrading to [`NullCache`] on failure.
async fn connect_cache(config: &Config) -> Arc<dyn CacheService> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    };

    match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
            Arc::new(NullCache::new())
        }
    }
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
