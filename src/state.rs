//! Shared application state.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::PgMappingRepository;
use crate::utils::slug::RandomSlugGenerator;

/// State injected into every handler.
///
/// Constructed once at startup and cloned per request; everything inside
/// is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    /// Slug allocator backed by the PostgreSQL store.
    pub shortener: Arc<ShortenerService<PgMappingRepository, RandomSlugGenerator>>,
    /// Pool handle kept for the health check's connectivity probe.
    pub db: Arc<PgPool>,
    /// Public base address used to build `short_url` values.
    pub base_url: String,
}

impl AppState {
    pub fn new(
        shortener: Arc<ShortenerService<PgMappingRepository, RandomSlugGenerator>>,
        db: Arc<PgPool>,
        base_url: String,
    ) -> Self {
        Self {
            shortener,
            db,
            base_url,
        }
    }
}
