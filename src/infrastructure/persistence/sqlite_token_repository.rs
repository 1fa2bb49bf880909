//! SQLite implementation of token repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::timestamp_from_secs;
use crate::domain::entities::AuthorizationToken;
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct TokenRow {
    id: i64,
    key: String,
    date_created: i64,
}

impl From<TokenRow> for AuthorizationToken {
    fn from(row: TokenRow) -> Self {
        AuthorizationToken {
            id: row.id,
            key: row.key,
            created_at: timestamp_from_secs(row.date_created),
        }
    }
}

/// SQLite repository for the authorization token table.
pub struct SqliteTokenRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTokenRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for SqliteTokenRepository {
    async fn find_by_key(&self, key: &str) -> Result<Option<AuthorizationToken>, AppError> {
        let row = sqlx::query_as::<_, TokenRow>(
            "SELECT id, key, date_created FROM authorization WHERE key = ? LIMIT 1",
        )
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(AuthorizationToken::from))
    }

    async fn first(&self) -> Result<Option<AuthorizationToken>, AppError> {
        let row = sqlx::query_as::<_, TokenRow>(
            "SELECT id, key, date_created FROM authorization ORDER BY id LIMIT 1",
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(AuthorizationToken::from))
    }

    async fn create(&self, key: &str) -> Result<AuthorizationToken, AppError> {
        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            "INSERT INTO authorization (id, key, date_created) VALUES (NULL, ?, ?)",
        )
        .bind(key)
        .bind(created_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(AuthorizationToken {
            id: result.last_insert_rowid(),
            key: key.to_string(),
            created_at: timestamp_from_secs(created_at),
        })
    }

    async fn list(&self) -> Result<Vec<AuthorizationToken>, AppError> {
        let rows = sqlx::query_as::<_, TokenRow>(
            "SELECT id, key, date_created FROM authorization ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(AuthorizationToken::from).collect())
    }
}
