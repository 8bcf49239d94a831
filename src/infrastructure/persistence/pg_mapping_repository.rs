//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::{AppError, is_unique_violation_on_slug};

/// PostgreSQL repository for URL mappings.
///
/// Slug uniqueness is enforced by the `url_mappings_slug_key` constraint;
/// the insert is atomic with respect to concurrent writers, so a duplicate
/// candidate drawn by two requests at once loses cleanly on one side.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO url_mappings (original_url, slug)
            VALUES ($1, $2)
            RETURNING id, original_url, slug, created_at, updated_at
            "#,
        )
        .bind(&new_mapping.original_url)
        .bind(&new_mapping.slug)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_slug(&e) {
                AppError::SlugTaken
            } else {
                AppError::Storage(e)
            }
        })
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, original_url, slug, created_at, updated_at
            FROM url_mappings
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }
}
