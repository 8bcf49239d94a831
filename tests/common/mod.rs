#![allow(dead_code)]

use shortly::application::services::ShortenerService;
use shortly::infrastructure::persistence::PgMappingRepository;
use shortly::state::AppState;
use shortly::utils::slug::RandomSlugGenerator;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "http://sho.rt";

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let repository = Arc::new(PgMappingRepository::new(pool.clone()));
    let shortener = Arc::new(ShortenerService::new(repository, RandomSlugGenerator));

    AppState::new(shortener, pool, TEST_BASE_URL.to_string())
}

pub async fn insert_test_mapping(pool: &PgPool, slug: &str, url: &str) {
    sqlx::query("INSERT INTO url_mappings (original_url, slug) VALUES ($1, $2)")
        .bind(url)
        .bind(slug)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn mapping_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
        .fetch_one(pool)
        .await
        .unwrap()
}
