//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenData, ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validate_url::is_valid_url;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com/a/b?c=1" }
/// ```
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "original_url": "https://example.com/a/b?c=1",
///     "slug": "aB3xY9Qz",
///     "short_url": "https://sho.rt/aB3xY9Qz",
///     "created_at": "2025-08-04T04:36:15Z"
///   }
/// }
/// ```
///
/// # Errors
///
/// - `400` if `original_url` is absent or empty
/// - `400` if the value is not a syntactically valid absolute URL
/// - `500` on storage failure or slug allocation exhaustion
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    if payload.original_url.is_empty() {
        return Err(AppError::Validation("original_url is required".to_string()));
    }

    if !is_valid_url(&payload.original_url) {
        return Err(AppError::Validation("Invalid URL format".to_string()));
    }

    let mapping = state.shortener.shorten(payload.original_url).await?;

    let short_url = format!("{}/{}", state.base_url.trim_end_matches('/'), mapping.slug);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            success: true,
            data: ShortenData {
                id: mapping.id,
                original_url: mapping.original_url,
                slug: mapping.slug,
                short_url,
                created_at: mapping.created_at,
            },
        }),
    ))
}
