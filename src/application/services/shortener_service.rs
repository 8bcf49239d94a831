//! Slug allocation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::slug::SlugGenerator;

/// Attempts before giving up on slug allocation.
///
/// With an 8-character alphanumeric keyspace the first attempt succeeds in
/// practice until the store holds on the order of 10^7 rows; hitting this
/// bound is a keyspace-saturation signal, not a transient fault.
const MAX_ATTEMPTS: u32 = 5;

/// Service for allocating slugs and resolving them back to mappings.
///
/// The allocator holds no state across requests besides its store handle.
/// Uniqueness is never checked ahead of time: a candidate is inserted
/// optimistically and the store's unique constraint arbitrates, so two
/// concurrent requests drawing the same slug cannot both succeed.
pub struct ShortenerService<R: MappingRepository, G: SlugGenerator> {
    repository: Arc<R>,
    generator: G,
}

impl<R: MappingRepository, G: SlugGenerator> ShortenerService<R, G> {
    /// Creates a new shortener service.
    pub fn new(repository: Arc<R>, generator: G) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Allocates a collision-free slug for `original_url` and persists the
    /// mapping.
    ///
    /// The URL is stored exactly as passed in; callers are expected to have
    /// validated it syntactically beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AllocationExhausted`] after `MAX_ATTEMPTS`
    /// consecutive uniqueness conflicts. Returns [`AppError::Storage`] on
    /// any other store failure, without retrying.
    pub async fn shorten(&self, original_url: String) -> Result<UrlMapping, AppError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let slug = self.generator.generate();

            let new_mapping = NewUrlMapping {
                original_url: original_url.clone(),
                slug,
            };

            match self.repository.insert(new_mapping).await {
                Ok(mapping) => return Ok(mapping),
                Err(AppError::SlugTaken) => {
                    tracing::warn!(attempt, "slug collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::AllocationExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Resolves a slug to its mapping, if one exists.
    ///
    /// Pure delegation to the store; an unknown slug is `Ok(None)`, never
    /// an error.
    pub async fn resolve(&self, slug: &str) -> Result<Option<UrlMapping>, AppError> {
        self.repository.find_by_slug(slug).await
    }
}
