//! Table definitions and startup bootstrap.

use sqlx::SqlitePool;

/// DDL for the authorization token table.
pub const CREATE_AUTHORIZATION: &str = "CREATE TABLE IF NOT EXISTS authorization (\
    id INTEGER PRIMARY KEY, \
    key TEXT NOT NULL, \
    date_created INTEGER NOT NULL)";

/// DDL for the links table. `short_url` holds the bare code, not the full URL.
pub const CREATE_LINKS: &str = "CREATE TABLE IF NOT EXISTS links (\
    short_url TEXT NOT NULL PRIMARY KEY, \
    full_url TEXT NOT NULL, \
    date_created INTEGER NOT NULL)";

/// Creates both tables if they are missing.
///
/// Every statement is attempted even if an earlier one fails. Failures are
/// logged here; the last one is returned so callers can decide whether to go
/// on. The server treats it as non-fatal.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut result = Ok(());

    for (table, ddl) in [("authorization", CREATE_AUTHORIZATION), ("links", CREATE_LINKS)] {
        match sqlx::query(ddl).execute(pool).await {
            Ok(_) => tracing::debug!(table, "table ready"),
            Err(e) => {
                tracing::error!(table, error = %e, "Failed to create table");
                result = Err(e);
            }
        }
    }

    result
}
