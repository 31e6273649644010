use axum::{
    routing::{get, post},
    Router,
};

use crate::proxy::handlers;
use crate::proxy::state::AppState;

pub fn build_api_routes() -> Router<AppState> {
    Router::new().route("/chat", post(handlers::chat::handle_chat))
}

pub fn build_health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(crate::proxy::health::health_check_handler))
        .route("/healthz", get(crate::proxy::health::health_check_handler))
}
