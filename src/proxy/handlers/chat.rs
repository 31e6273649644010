// Chat relay handler
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::errors::{invalid_body_response, no_prompt_response, upstream_error_response};
use crate::models::GatewayConfig;
use crate::modules::system::logger;
use crate::proxy::state::ChatHandlerState;
use crate::proxy::upstream::{compat_base_url, ChatCompletionRequest, ChatGateway, UpstreamError};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

// Only JSON objects are accepted; serde would otherwise also read a struct
// from a JSON array.
pub fn parse_chat_request(body: &[u8]) -> Option<ChatRequest> {
    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    }
}

impl ChatRequest {
    /// The prompt, if present and non-empty.
    pub fn prompt(self) -> Option<String> {
        self.prompt.filter(|prompt| !prompt.is_empty())
    }
}

pub async fn handle_chat(State(state): State<ChatHandlerState>, body: Bytes) -> Response {
    // Validation failures are answered without touching the gateway or the log.
    let Some(request) = parse_chat_request(&body) else {
        return invalid_body_response();
    };
    let Some(prompt) = request.prompt() else {
        return no_prompt_response();
    };

    match relay_prompt(state.gateway.as_ref(), &state.config.gateway, prompt).await {
        Ok(completion) => (StatusCode::OK, Json(completion)).into_response(),
        Err(err) => {
            logger::log_error(&format!("[Chat] Upstream request failed: {}", err));
            upstream_error_response(&err)
        }
    }
}

async fn relay_prompt(
    gateway: &dyn ChatGateway,
    config: &GatewayConfig,
    prompt: String,
) -> Result<Value, UpstreamError> {
    let gateway_url = gateway.resolve_compatibility_url(&config.gateway_id).await?;
    let base_url = compat_base_url(&gateway_url);
    debug!("[Chat] Dispatching completion to {} (model: {})", base_url, config.model);

    let request = ChatCompletionRequest::single_user_message(config.model.as_str(), prompt);
    gateway.create_completion(&base_url, &request).await
}
