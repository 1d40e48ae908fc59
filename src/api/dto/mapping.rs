//! DTO for mapping responses returned by `/shorten` and `/check`.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlMapping;

/// Public view of a URL mapping.
///
/// Field names on the wire are `originalURL` and `shortenedID`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingResponse {
    #[serde(rename = "originalURL")]
    pub original_url: String,

    #[serde(rename = "shortenedID")]
    pub shortened_id: String,
}

impl From<UrlMapping> for MappingResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            original_url: mapping.original_url,
            shortened_id: mapping.shortened_id,
        }
    }
}
