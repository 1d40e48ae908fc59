//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Identifier allocation, URL shortening and resolution

pub mod services;
