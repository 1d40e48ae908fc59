//! Process-local mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::{MappingRepository, StoreError};

#[derive(Default)]
struct Inner {
    by_id: HashMap<String, UrlMapping>,
    last_row_id: i64,
}

/// A mapping store held entirely in memory.
///
/// Behaves like the PostgreSQL store, including rejection of duplicate
/// identifiers, but loses everything when dropped.
///
/// Used by handler and service tests that should not need a database.
#[derive(Default)]
pub struct InMemoryMappingRepository {
    inner: RwLock<Inner>,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `(original_url, shortened_id)` pairs.
    pub fn with_mappings<I, U, S>(mappings: I) -> Self
    where
        I: IntoIterator<Item = (U, S)>,
        U: Into<String>,
        S: Into<String>,
    {
        let mut inner = Inner::default();
        for (original_url, shortened_id) in mappings {
            inner.last_row_id += 1;
            let mapping = UrlMapping::new(
                inner.last_row_id,
                original_url.into(),
                shortened_id.into(),
                Utc::now(),
            );
            inner.by_id.insert(mapping.shortened_id.clone(), mapping);
        }

        Self {
            inner: RwLock::new(inner),
        }
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn count_records(&self) -> Result<i64, StoreError> {
        Ok(self.inner.read().await.by_id.len() as i64)
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.by_id.contains_key(&new_mapping.shortened_id) {
            return Err(StoreError::DuplicateId(new_mapping.shortened_id));
        }

        inner.last_row_id += 1;
        let mapping = UrlMapping::new(
            inner.last_row_id,
            new_mapping.original_url,
            new_mapping.shortened_id,
            Utc::now(),
        );
        inner
            .by_id
            .insert(mapping.shortened_id.clone(), mapping.clone());

        Ok(mapping)
    }

    async fn find_by_shortened_id(&self, id: &str) -> Result<Option<UrlMapping>, StoreError> {
        Ok(self.inner.read().await.by_id.get(id).cloned())
    }
}
