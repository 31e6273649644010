pub mod cors;
pub mod request_context;

pub use cors::cors_layer;
pub use request_context::request_context_middleware;
