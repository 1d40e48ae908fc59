//! URL shortening and resolution service.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::id_counter::IdCounter;
use crate::domain::repositories::{MappingRepository, StoreError};
use crate::error::AppError;
use crate::utils::base62::encode;
use crate::utils::url_validator::is_valid_url;

/// Identifiers shadowed by fixed routes; never handed out.
pub const RESERVED_IDS: &[&str] = &["health"];

/// Inserts attempted before giving up on identifier collisions.
const MAX_INSERT_ATTEMPTS: usize = 10;

/// Service for creating and resolving short identifiers.
///
/// Owns the identifier counter. The counter must be seeded once through
/// [`ShortenerService::initialize`] before requests are served.
pub struct ShortenerService<R: MappingRepository + ?Sized> {
    repository: Arc<R>,
    counter: IdCounter,
    seeded: OnceCell<i64>,
}

impl<R: MappingRepository + ?Sized> ShortenerService<R> {
    /// Creates a new service with the counter at the baseline.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            counter: IdCounter::new(),
            seeded: OnceCell::new(),
        }
    }

    /// Seeds the counter from the number of stored mappings.
    ///
    /// Returns the record count. Only the first successful call advances the
    /// counter; later calls return the same count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store cannot be counted. The counter
    /// is left untouched so a later call can retry.
    pub async fn initialize(&self) -> Result<i64, AppError> {
        let count = self
            .seeded
            .get_or_try_init(|| async {
                let count = self.repository.count_records().await?;
                self.counter.advance(count.max(0) as u64);
                info!(
                    "Identifier counter seeded at {} ({} stored mappings)",
                    self.counter.current(),
                    count
                );
                Ok::<_, StoreError>(count)
            })
            .await?;

        Ok(*count)
    }

    /// Validates `raw_url` and stores it under a freshly allocated identifier.
    ///
    /// # Identifier Allocation
    ///
    /// - Validation happens first; rejected input consumes no counter value
    /// - Each attempt takes the next counter value and encodes it
    /// - Reserved identifiers are skipped
    /// - If the store reports the identifier as taken, the next value is tried,
    ///   up to 10 attempts
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL fails [`is_valid_url`].
    /// Returns [`AppError::Store`] on persistence failures.
    pub async fn create(&self, raw_url: &str) -> Result<UrlMapping, AppError> {
        if !is_valid_url(raw_url) {
            return Err(AppError::invalid_url(raw_url));
        }

        for _ in 0..MAX_INSERT_ATTEMPTS {
            let shortened_id = self.allocate_id();

            match self
                .repository
                .insert(NewMapping::new(raw_url, shortened_id))
                .await
            {
                Ok(mapping) => {
                    debug!(
                        "Created mapping {} -> {}",
                        mapping.shortened_id, mapping.original_url
                    );
                    return Ok(mapping);
                }
                Err(StoreError::DuplicateId(taken)) => {
                    warn!("Identifier {} already stored, allocating another", taken);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(StoreError::TooManyCollisions(MAX_INSERT_ATTEMPTS).into())
    }

    /// Resolves an identifier to its mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has exactly this identifier.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn read(&self, id: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .find_by_shortened_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(id))
    }

    /// Number of stored mappings, queried live.
    pub async fn record_count(&self) -> Result<i64, AppError> {
        Ok(self.repository.count_records().await?)
    }

    /// Identifier the next create would receive, barring collisions.
    pub fn peek_next_id(&self) -> String {
        let mut next = self.counter.current() + 1;
        while RESERVED_IDS.contains(&encode(next).as_str()) {
            next += 1;
        }
        encode(next)
    }

    fn allocate_id(&self) -> String {
        loop {
            let id = encode(self.counter.next());
            if !RESERVED_IDS.contains(&id.as_str()) {
                return id;
            }
        }
    }
}
