//! Domain layer containing business entities and logic.
//!
//! Independent of HTTP and database concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`id_counter`] - Process-wide source of identifier values
//!
//! # Identifier Flow
//!
//! 1. At startup the counter is seeded with [`id_counter::BASELINE`] plus the
//!    number of stored mappings
//! 2. Each accepted URL takes the next counter value
//! 3. The value is encoded with [`crate::utils::base62::encode`]
//! 4. The mapping is persisted via [`repositories::MappingRepository`]

pub mod entities;
pub mod id_counter;
pub mod repositories;
