//! Core domain entities.
//!
//! - [`UrlMapping`] - A persisted slug-to-URL association
//! - [`NewUrlMapping`] - Input data for creating a mapping

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
