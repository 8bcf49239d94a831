mod common;

use shortly::domain::entities::NewUrlMapping;
use shortly::domain::repositories::MappingRepository;
use shortly::error::AppError;
use shortly::infrastructure::persistence::PgMappingRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_mapping(url: &str, slug: &str) -> NewUrlMapping {
    NewUrlMapping {
        original_url: url.to_string(),
        slug: slug.to_string(),
    }
}

#[sqlx::test]
async fn test_insert_returns_persisted_mapping(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let mapping = repo
        .insert(new_mapping("https://example.com", "abcd1234"))
        .await
        .unwrap();

    assert!(mapping.id > 0);
    assert_eq!(mapping.slug, "abcd1234");
    assert_eq!(mapping.original_url, "https://example.com");
}

#[sqlx::test]
async fn test_insert_assigns_increasing_ids(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let first = repo
        .insert(new_mapping("https://example.com/1", "first001"))
        .await
        .unwrap();
    let second = repo
        .insert(new_mapping("https://example.com/2", "second02"))
        .await
        .unwrap();

    assert!(second.id > first.id);
}

#[sqlx::test]
async fn test_insert_duplicate_slug_is_rejected(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool.clone()));

    repo.insert(new_mapping("https://example.com/1", "taken123"))
        .await
        .unwrap();

    let result = repo
        .insert(new_mapping("https://example.com/2", "taken123"))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::SlugTaken));

    // The failed insert left no partial row behind.
    assert_eq!(common::mapping_count(&pool).await, 1);
}

#[sqlx::test]
async fn test_insert_stores_url_verbatim(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let url = "https://Example.com:8443/Path?q=1&x=%20#frag";
    repo.insert(new_mapping(url, "verbatim")).await.unwrap();

    let found = repo.find_by_slug("verbatim").await.unwrap().unwrap();
    assert_eq!(found.original_url, url);
}

#[sqlx::test]
async fn test_find_by_slug(pool: PgPool) {
    common::insert_test_mapping(&pool, "findme00", "https://example.com").await;
    let repo = PgMappingRepository::new(Arc::new(pool));

    let mapping = repo.find_by_slug("findme00").await.unwrap();

    assert!(mapping.is_some());
    assert_eq!(mapping.unwrap().original_url, "https://example.com");
}

#[sqlx::test]
async fn test_find_by_slug_not_found(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let mapping = repo.find_by_slug("missing0").await.unwrap();

    assert!(mapping.is_none());
}
