//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use std::fmt;

/// A stored mapping from a short token to its original URL.
///
/// `code` is the primary key and never changes once written.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    pub fn new(code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            long_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
}

/// Fully qualified short URL handed back to clients (`{base_url}/{code}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl(String);

impl ShortUrl {
    pub fn new(base_url: &str, code: &str) -> Self {
        Self(format!("{}/{}", base_url.trim_end_matches('/'), code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ShortUrl> for String {
    fn from(value: ShortUrl) -> Self {
        value.0
    }
}
