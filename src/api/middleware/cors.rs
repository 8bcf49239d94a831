//! CORS middleware.

use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS layer.
///
/// The browser client is served from a separate origin, and every endpoint
/// here is public, so all origins, methods, and headers are allowed.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
