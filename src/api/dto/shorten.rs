//! DTOs for the shorten endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten. An absent field deserializes to an
    /// empty string so both cases produce the same validation error.
    #[serde(default)]
    pub original_url: String,
}

/// Envelope returned on successful creation.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub success: bool,
    pub data: ShortenData,
}

/// The created mapping as exposed to clients.
///
/// `updated_at` is deliberately not exposed; nothing ever updates a mapping.
#[derive(Debug, Serialize)]
pub struct ShortenData {
    pub id: i64,
    pub original_url: String,
    pub slug: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}
