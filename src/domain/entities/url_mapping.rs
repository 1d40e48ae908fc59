//! URL mapping entity pairing an original URL with its short identifier.

use chrono::{DateTime, Utc};

/// A stored mapping from a short identifier to the URL it stands for.
///
/// Mappings are written once and never mutated. `original_url` is kept exactly
/// as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub original_url: String,
    pub shortened_id: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        original_url: String,
        shortened_id: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            shortened_id,
            created_at,
        }
    }
}

/// Input data for storing a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub original_url: String,
    pub shortened_id: String,
}

impl NewMapping {
    pub fn new(original_url: impl Into<String>, shortened_id: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            shortened_id: shortened_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let now = Utc::now();
        let mapping = UrlMapping::new(
            1,
            "https://example.com/page".to_string(),
            "2Bj".to_string(),
            now,
        );

        assert_eq!(mapping.id, 1);
        assert_eq!(mapping.original_url, "https://example.com/page");
        assert_eq!(mapping.shortened_id, "2Bj");
        assert_eq!(mapping.created_at, now);
    }

    #[test]
    fn test_new_mapping_keeps_url_verbatim() {
        let new_mapping = NewMapping::new("HTTPS://Example.COM:443/path/", "2Bk");

        assert_eq!(new_mapping.original_url, "HTTPS://Example.COM:443/path/");
        assert_eq!(new_mapping.shortened_id, "2Bk");
    }
}
