use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

pub const ALLOWED_METHODS: [Method; 3] = [Method::POST, Method::GET, Method::OPTIONS];

// Browser clients call the relay from arbitrary origins; no credentials are
// involved, so a wildcard origin is safe.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(Any)
        .allow_credentials(false)
        .max_age(std::time::Duration::from_secs(3600))
}
