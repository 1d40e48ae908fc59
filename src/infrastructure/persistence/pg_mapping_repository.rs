//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::{MappingRepository, StoreError};
use crate::utils::db_error::is_unique_violation_on_shortened_id;

#[derive(sqlx::FromRow)]
struct MappingRow {
    id: i64,
    original_url: String,
    shortened_id: String,
    created_at: DateTime<Utc>,
}

impl From<MappingRow> for UrlMapping {
    fn from(row: MappingRow) -> Self {
        UrlMapping::new(row.id, row.original_url, row.shortened_id, row.created_at)
    }
}

/// PostgreSQL repository for URL mappings stored in `url_mappings`.
///
/// Uniqueness of `shortened_id` is enforced by the
/// `url_mappings_shortened_id_key` index, which also serves lookups.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn count_records(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, StoreError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO url_mappings (original_url, shortened_id)
            VALUES ($1, $2)
            RETURNING id, original_url, shortened_id, created_at
            "#,
        )
        .bind(&new_mapping.original_url)
        .bind(&new_mapping.shortened_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_shortened_id(&e) {
                StoreError::DuplicateId(new_mapping.shortened_id.clone())
            } else {
                StoreError::Database(e)
            }
        })?;

        Ok(row.into())
    }

    async fn find_by_shortened_id(&self, id: &str) -> Result<Option<UrlMapping>, StoreError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, original_url, shortened_id, created_at
            FROM url_mappings
            WHERE shortened_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }
}
