//! Mapping repository implementations.
//!
//! # Repositories
//!
//! - [`PgMappingRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryMappingRepository`] - Process-local storage for tests

pub mod memory_mapping_repository;
pub mod pg_mapping_repository;

pub use memory_mapping_repository::InMemoryMappingRepository;
pub use pg_mapping_repository::PgMappingRepository;
