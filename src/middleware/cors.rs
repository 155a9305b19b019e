use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Any origin; the methods and headers the trivia client uses.
pub fn trivia_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
