use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

use crate::modules::system::request_context::{with_request_context, RequestContext};

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

fn header_value(request: &Request, name: &str) -> Option<String> {
    request
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub async fn request_context_middleware(request: Request, next: Next) -> Response {
    let request_id =
        header_value(&request, REQUEST_ID_HEADER).unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let correlation_id = header_value(&request, CORRELATION_ID_HEADER);
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());

    tracing::debug!(
        request_id = %request_id,
        client_ip = client_ip.as_deref().unwrap_or("-"),
        "{} {}",
        request.method(),
        request.uri().path()
    );

    let ctx = RequestContext {
        request_id: Some(request_id.clone()),
        correlation_id,
    };

    let mut response = with_request_context(ctx, async move { next.run(request).await }).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
