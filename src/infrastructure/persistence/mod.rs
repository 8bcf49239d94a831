//! PostgreSQL repository implementations.
//!
//! - [`PgMappingRepository`] - URL mapping storage and retrieval

pub mod pg_mapping_repository;

pub use pg_mapping_repository::PgMappingRepository;
