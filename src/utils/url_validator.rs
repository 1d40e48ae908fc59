//! Syntactic URL validation applied before any mapping is stored.
//!
//! The check is purely textual: no DNS lookups, no reachability probes and no
//! canonicalization. A URL that passes is stored byte-for-byte as submitted.

use regex::Regex;
use std::sync::LazyLock;

/// URLs this long or longer are rejected outright.
pub const MAX_URL_LENGTH: usize = 2083;

/// Scheme, optional userinfo, host (IPv4, domain with an alphabetic TLD, or
/// `localhost`), optional 2-5 digit port, and an optional whitespace-free
/// path/query/fragment.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:http|https|ftp)://",
        r"(?:\S+(?::\S*)?@)?",
        r"(?:",
        r"(?:[1-9][0-9]?|1[0-9][0-9]|2[01][0-9]|22[0-3])",
        r"(?:\.(?:1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])){2}",
        r"(?:\.(?:[0-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-4]))",
        r"|",
        r"(?:(?:[a-z\x{00a1}-\x{ffff}0-9]+-?)*[a-z\x{00a1}-\x{ffff}0-9]+)",
        r"(?:\.(?:[a-z\x{00a1}-\x{ffff}0-9]+-?)*[a-z\x{00a1}-\x{ffff}0-9]+)*",
        r"(?:\.[a-z\x{00a1}-\x{ffff}]{2,})",
        r"|",
        r"localhost",
        r")",
        r"(?::[0-9]{2,5})?",
        r"(?:[/?#]\S*)?$",
    ))
    .unwrap()
});

/// Returns `true` if `s` is an acceptable URL to shorten.
///
/// Only `http`, `https` and `ftp` schemes are accepted (case-insensitive), so
/// `mailto:`, `javascript:` and scheme-less input are all rejected.
///
/// # Examples
///
/// ```
/// use base62_shortener::utils::url_validator::is_valid_url;
///
/// assert!(is_valid_url("https://example.com"));
/// assert!(is_valid_url("http://localhost:8080/path"));
/// assert!(!is_valid_url("mailto:test@example.com"));
/// ```
pub fn is_valid_url(s: &str) -> bool {
    s.chars().count() < MAX_URL_LENGTH && URL_REGEX.is_match(s)
}
