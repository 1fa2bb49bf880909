//! Authorization token entity.

use chrono::{DateTime, Utc};

/// The shared bearer credential permitting link creation.
///
/// Stored in plain text and compared by equality.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizationToken {
    pub id: i64,
    pub key: String,
    pub created_at: DateTime<Utc>,
}
