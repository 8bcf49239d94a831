//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the mapping store.
///
/// The store is the sole authority for slug uniqueness: `insert` must fail
/// atomically on a duplicate slug, arbitrated by the storage engine itself,
/// so that two concurrent inserts of the same candidate can never both
/// succeed. No update or delete operations exist.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Persists a new mapping, assigning its `id` and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SlugTaken`] if the slug already exists; no
    /// partial row is left behind. Returns [`AppError::Storage`] on any
    /// other database error.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Point lookup by slug. Pure read, no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlMapping>, AppError>;
}
