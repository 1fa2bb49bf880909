mod common;

use smolink::application::services::AuthService;
use smolink::domain::repositories::TokenRepository;
use smolink::infrastructure::persistence::{SqliteTokenRepository, ensure_schema};
use std::sync::Arc;

#[tokio::test]
async fn test_create_token() {
    let pool = common::test_pool().await;
    let repo = SqliteTokenRepository::new(Arc::new(pool));

    let token = repo.create("secret").await.unwrap();

    assert_eq!(token.key, "secret");
    assert!(token.id > 0);
}

#[tokio::test]
async fn test_find_by_key() {
    let pool = common::test_pool().await;
    common::create_test_token(&pool, "secret").await;
    let repo = SqliteTokenRepository::new(Arc::new(pool));

    assert!(repo.find_by_key("secret").await.unwrap().is_some());
    assert!(repo.find_by_key("Secret").await.unwrap().is_none());
    assert!(repo.find_by_key("").await.unwrap().is_none());
}

#[tokio::test]
async fn test_first_returns_oldest() {
    let pool = common::test_pool().await;
    let repo = SqliteTokenRepository::new(Arc::new(pool));

    assert!(repo.first().await.unwrap().is_none());

    repo.create("first").await.unwrap();
    repo.create("second").await.unwrap();

    assert_eq!(repo.first().await.unwrap().unwrap().key, "first");
    assert_eq!(repo.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_validate_token() {
    let pool = common::test_pool().await;
    common::create_test_token(&pool, "secret").await;
    let service = AuthService::new(Arc::new(SqliteTokenRepository::new(Arc::new(pool))));

    assert!(service.validate_token("secret").await);
    assert!(!service.validate_token("wrong").await);
}

#[tokio::test]
async fn test_validate_token_without_table_is_false() {
    let pool = common::test_pool().await;
    sqlx::query("DROP TABLE authorization")
        .execute(&pool)
        .await
        .unwrap();
    let service = AuthService::new(Arc::new(SqliteTokenRepository::new(Arc::new(pool))));

    assert!(!service.validate_token("secret").await);
}

#[tokio::test]
async fn test_provision_only_once() {
    let pool = common::test_pool().await;
    let repo = Arc::new(SqliteTokenRepository::new(Arc::new(pool)));
    let service = AuthService::new(repo.clone());

    let first = service.provision_default_token().await.unwrap();
    let second = service.provision_default_token().await.unwrap();

    let token = first.expect("first provisioning generates a token");
    assert!(second.is_none());

    let stored = repo.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].key, token);
    assert!(service.validate_token(&token).await);
}

#[tokio::test]
async fn test_provision_keeps_existing_token() {
    let pool = common::test_pool().await;
    common::create_test_token(&pool, "preexisting").await;
    let repo = Arc::new(SqliteTokenRepository::new(Arc::new(pool)));
    let service = AuthService::new(repo.clone());

    assert!(service.provision_default_token().await.unwrap().is_none());
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "keep", "https://example.com").await;

    ensure_schema(&pool).await.unwrap();
    ensure_schema(&pool).await.unwrap();

    assert_eq!(common::count_links(&pool).await, 1);
}
