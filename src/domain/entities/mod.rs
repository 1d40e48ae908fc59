//! Core domain entities representing the business data model.
//!
//! The service persists a single entity, [`UrlMapping`]. Creation input is a
//! separate [`NewMapping`] struct since the surrogate key and timestamp are
//! assigned by the store.

pub mod url_mapping;

pub use url_mapping::{NewMapping, UrlMapping};
