//! HTTP request handlers for the public endpoints.

pub mod check;
pub mod health;
pub mod lookup;
pub mod redirect;
pub mod shorten;

pub use check::check_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
