//! UrlMapping entity representing a shortened URL.

use chrono::{DateTime, Utc};

/// A persisted association between a slug and an original URL.
///
/// Mappings are created exactly once and never mutated or deleted
/// afterwards. `original_url` is stored verbatim as submitted; `updated_at`
/// is maintained by the schema for symmetry but no write path touches it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: i64,
    pub original_url: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new mapping.
///
/// `id` and the timestamps are assigned by the store on insert.
#[derive(Debug, Clone)]
pub struct NewUrlMapping {
    pub original_url: String,
    pub slug: String,
}
