//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries against a single local database file.
//!
//! - [`SqliteLinkRepository`] - Link storage and retrieval
//! - [`SqliteTokenRepository`] - Authorization token storage
//! - [`schema`] - Table bootstrap

pub mod schema;
pub mod sqlite_link_repository;
pub mod sqlite_token_repository;

pub use schema::ensure_schema;
pub use sqlite_link_repository::SqliteLinkRepository;
pub use sqlite_token_repository::SqliteTokenRepository;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Opens a connection pool, creating the database file if it does not exist.
///
/// # Errors
///
/// Returns an error if the URL is not a valid SQLite URL or the file cannot be opened.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Converts a stored `date_created` value (Unix seconds) into a timestamp.
pub(crate) fn timestamp_from_secs(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}
