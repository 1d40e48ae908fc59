//! Utility functions for identifier encoding, URL validation, and database errors.
//!
//! - [`base62`] - Counter to identifier encoding
//! - [`url_validator`] - Syntactic URL validation
//! - [`db_error`] - SQLx error classification

pub mod base62;
pub mod db_error;
pub mod url_validator;
