//! Repository trait for URL mapping persistence.

use crate::domain::entities::{NewMapping, UrlMapping};
use async_trait::async_trait;

/// Failures raised by a mapping store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("shortened ID already exists: {0}")]
    DuplicateId(String),

    #[error("no free identifier after {0} attempts")]
    TooManyCollisions(usize),
}

/// Repository interface for URL mappings.
///
/// Lookups are by exact identifier match only; identifiers are never decoded
/// back into counter values.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Counts all stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on connectivity or query failure.
    async fn count_records(&self) -> Result<i64, StoreError>;

    /// Stores a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if the shortened ID is already taken.
    /// Returns [`StoreError::Database`] on other persistence failures.
    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, StoreError>;

    /// Finds a mapping by its shortened ID (case-sensitive, exact match).
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn find_by_shortened_id(&self, id: &str) -> Result<Option<UrlMapping>, StoreError>;
}
