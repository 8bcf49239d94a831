//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its original URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Response
///
/// `301 Moved Permanently` with the stored URL, byte-for-byte as submitted,
/// in the `Location` header. Axum's `Redirect` helper only offers
/// 303/307/308, so the response is assembled by hand.
///
/// # Errors
///
/// Returns 404 if no mapping exists for the slug.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mapping = state
        .shortener
        .resolve(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Shortened URL not found".to_string()))?;

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, mapping.original_url)],
    ))
}
