//! Application layer services implementing business logic.
//!
//! Services consume domain repository traits and provide a clean API for
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Slug allocation and resolution

pub mod services;
