//! HTTP API layer.
//!
//! Translates requests into shortening service calls and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
