mod common;

use smolink::AppError;
use smolink::domain::entities::NewLink;
use smolink::domain::repositories::LinkRepository;
use smolink::infrastructure::persistence::SqliteLinkRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_create_link() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let new_link = NewLink {
        code: "test123".to_string(),
        long_url: "https://example.com".to_string(),
    };

    let link = repo.create(new_link).await.unwrap();

    assert_eq!(link.code, "test123");
    assert_eq!(link.long_url, "https://example.com");
}

#[tokio::test]
async fn test_create_duplicate_code_fails() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "taken", "https://first.example").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool.clone()));

    let result = repo
        .create(NewLink {
            code: "taken".to_string(),
            long_url: "https://second.example".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Internal { .. })));

    // The original mapping is not overwritten.
    let link = repo.find_by_code("taken").await.unwrap().unwrap();
    assert_eq!(link.long_url, "https://first.example");
}

#[tokio::test]
async fn test_find_by_code() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "abc123", "https://example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_code("abc123").await.unwrap();

    assert!(link.is_some());
    let link = link.unwrap();
    assert_eq!(link.code, "abc123");
    assert_eq!(link.long_url, "https://example.com");
    assert!(link.created_at.timestamp() > 0);
}

#[tokio::test]
async fn test_find_by_code_not_found() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_code("nonexistent").await.unwrap();

    assert!(link.is_none());
}

#[tokio::test]
async fn test_count() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "one", "https://example.com/1").await;
    common::create_test_link(&pool, "two", "https://example.com/2").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 2);
}
