//! Application error taxonomy and HTTP response mapping.
//!
//! Every error a handler can return is an [`AppError`]. The wire format is a
//! flat JSON object: `{ "error": "<message>" }`. Storage-level failures are
//! logged with their cause and masked as `"Internal server error"`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing input. Surfaced as 400 with the message verbatim.
    #[error("{0}")]
    Validation(String),

    /// No mapping exists for the requested slug. Surfaced as 404.
    #[error("{0}")]
    NotFound(String),

    /// Unique-constraint conflict on the slug column. Expected under
    /// concurrent inserts and consumed by the allocator's retry loop;
    /// reaching the response layer means the retry bound was bypassed.
    #[error("slug already taken")]
    SlugTaken,

    /// The allocator ran out of retry attempts. A capacity signal, not a
    /// client fault. Surfaced as 500.
    #[error("slug allocation exhausted after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },

    /// Database connectivity or I/O failure. Surfaced as 500, never retried.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::SlugTaken => {
                tracing::error!("slug conflict escaped the allocator retry loop");
                internal_error()
            }
            AppError::AllocationExhausted { attempts } => {
                tracing::error!(attempts, "slug allocation exhausted");
                internal_error()
            }
            AppError::Storage(e) => {
                tracing::error!(error = %e, "storage error");
                internal_error()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

fn internal_error() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

/// Recognizes a unique violation on the `url_mappings.slug` constraint.
///
/// Any other database error, unique violations on other constraints
/// included, is treated as opaque storage failure.
pub fn is_unique_violation_on_slug(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some("url_mappings_slug_key"))
}
