//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::timestamp_from_secs;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct LinkRow {
    short_url: String,
    full_url: String,
    date_created: i64,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.short_url,
            row.full_url,
            timestamp_from_secs(row.date_created),
        )
    }
}

/// SQLite repository for link storage and retrieval.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let created_at = Utc::now();

        sqlx::query("INSERT INTO links (short_url, full_url, date_created) VALUES (?, ?, ?)")
            .bind(&new_link.code)
            .bind(&new_link.long_url)
            .bind(created_at.timestamp())
            .execute(self.pool.as_ref())
            .await?;

        Ok(Link::new(
            new_link.code,
            new_link.long_url,
            timestamp_from_secs(created_at.timestamp()),
        ))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            "SELECT short_url, full_url, date_created FROM links WHERE short_url = ?",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
