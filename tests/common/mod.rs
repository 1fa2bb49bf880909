#![allow(dead_code)]

use smolink::infrastructure::persistence::ensure_schema;
use smolink::routes::app_router;
use smolink::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;

pub const BASE_URL: &str = "https://short.example";
pub const TEST_TOKEN: &str = "test-authorization-token";

/// In-memory database with both tables created.
///
/// A single connection that never expires, so every query sees the same database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    ensure_schema(&pool).await.unwrap();

    pool
}

pub async fn create_test_token(pool: &SqlitePool, key: &str) {
    sqlx::query("INSERT INTO authorization (key, date_created) VALUES (?, strftime('%s','now'))")
        .bind(key)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query(
        "INSERT INTO links (short_url, full_url, date_created) VALUES (?, ?, strftime('%s','now'))",
    )
    .bind(code)
    .bind(url)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), BASE_URL)
}

/// Full application router over `pool`, with [`TEST_TOKEN`] provisioned.
pub async fn create_test_app(pool: SqlitePool) -> axum::Router {
    create_test_token(&pool, TEST_TOKEN).await;
    app_router(create_test_state(pool))
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
