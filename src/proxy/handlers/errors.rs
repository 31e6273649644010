use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::constants::{INVALID_BODY_MESSAGE, NO_PROMPT_MESSAGE};
use crate::proxy::upstream::UpstreamError;

pub fn error_envelope_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

pub fn no_prompt_response() -> Response {
    error_envelope_response(StatusCode::BAD_REQUEST, NO_PROMPT_MESSAGE)
}

pub fn invalid_body_response() -> Response {
    error_envelope_response(StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE)
}

/// Reported status when it is a valid HTTP status, 502 otherwise.
pub fn upstream_status(err: &UpstreamError) -> StatusCode {
    err.reported_status()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::BAD_GATEWAY)
}

// Non-empty provider body goes out untouched; otherwise the envelope.
pub fn upstream_error_response(err: &UpstreamError) -> Response {
    let status = upstream_status(err);
    match err.upstream_body() {
        Some(body) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response(),
        None => error_envelope_response(status, err.client_message()),
    }
}
