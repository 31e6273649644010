use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::constants::{COMPAT_PATH, UPSTREAM_ERROR_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    /// The upstream answered 2xx but the payload was not JSON.
    Parse,
    /// No usable HTTP exchange: resolution, connect, TLS, body read.
    Network,
    /// The upstream answered with a non-2xx status.
    Provider,
}

/// Response attached to a failed upstream call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: Option<u16>,
    /// `None` when the body could not be read.
    pub body: Option<String>,
}

#[derive(Debug, Clone, Error)]
#[error(
    "{kind:?} failure (status: {status:?}): {}",
    .message.as_deref().unwrap_or(UPSTREAM_ERROR_MESSAGE)
)]
pub struct UpstreamError {
    pub kind: UpstreamErrorKind,
    pub status: Option<u16>,
    pub response: Option<UpstreamResponse>,
    pub message: Option<String>,
}

impl UpstreamError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: UpstreamErrorKind::Network,
            status: None,
            response: None,
            message: Some(message.into()),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: UpstreamErrorKind::Parse,
            status: None,
            response: None,
            message: Some(message.into()),
        }
    }

    pub fn provider(status: u16, body: Option<String>) -> Self {
        Self {
            kind: UpstreamErrorKind::Provider,
            status: None,
            response: Some(UpstreamResponse {
                status: Some(status),
                body,
            }),
            message: Some(format!("Upstream returned {}", status)),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Explicit status first, then the attached response's status.
    pub fn reported_status(&self) -> Option<u16> {
        self.status
            .or_else(|| self.response.as_ref().and_then(|r| r.status))
    }

    /// Raw upstream body, when one was read and is non-empty.
    pub fn upstream_body(&self) -> Option<&str> {
        self.response
            .as_ref()
            .and_then(|r| r.body.as_deref())
            .filter(|body| !body.is_empty())
    }

    pub fn client_message(&self) -> &str {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(UPSTREAM_ERROR_MESSAGE)
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        let mapped = Self::network(err.to_string());
        match err.status() {
            Some(status) => mapped.with_status(status.as_u16()),
            None => mapped,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    pub fn single_user_message(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.into(),
            }],
        }
    }
}

/// Compatibility-mode base URL for a resolved gateway URL.
pub fn compat_base_url(gateway_url: &str) -> String {
    format!("{}/{}", gateway_url.trim_end_matches('/'), COMPAT_PATH)
}

#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Resolves a gateway identifier to the URL the compatibility endpoint
    /// hangs off (see [`compat_base_url`]).
    async fn resolve_compatibility_url(&self, gateway_id: &str) -> Result<String, UpstreamError>;

    /// Issues one chat completion against `base_url` and returns the
    /// provider's completion object untouched.
    async fn create_completion(
        &self,
        base_url: &str,
        request: &ChatCompletionRequest,
    ) -> Result<Value, UpstreamError>;
}
