//! DTOs for the link creation endpoint.

use serde::Serialize;

use crate::domain::entities::ShortUrl;

/// Response body of a successful create.
///
/// `shorturl` duplicates `url`; older clients read one, newer clients the other.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub url: String,
    pub shorturl: String,
}

impl From<ShortUrl> for ShortenResponse {
    fn from(short: ShortUrl) -> Self {
        let url = String::from(short);
        Self {
            shorturl: url.clone(),
            url,
        }
    }
}
