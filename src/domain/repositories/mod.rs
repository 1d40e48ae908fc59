//! Repository trait definitions for the domain layer.
//!
//! The trait abstracts the mapping store so the shortening service can run
//! against PostgreSQL in production and against in-memory or mock stores in
//! tests.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod mapping_repository;

pub use mapping_repository::{MappingRepository, StoreError};

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
