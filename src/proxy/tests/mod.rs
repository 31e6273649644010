
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::models::GatewayConfig;
use crate::proxy::state::AppState;
use crate::proxy::upstream::{ChatCompletionRequest, ChatGateway, UpstreamError};

pub(crate) const TEST_GATEWAY_URL: &str = "https://gateway.test/v1/acct/relay-gw";

/// Scripted gateway that records every call it receives.
pub(crate) struct MockGateway {
    resolution: Result<String, UpstreamError>,
    outcome: Result<Value, UpstreamError>,
    pub resolve_calls: AtomicUsize,
    pub completion_calls: AtomicUsize,
    pub requests: Mutex<Vec<(String, ChatCompletionRequest)>>,
}

impl MockGateway {
    fn with(resolution: Result<String, UpstreamError>, outcome: Result<Value, UpstreamError>) -> Self {
        Self {
            resolution,
            outcome,
            resolve_calls: AtomicUsize::new(0),
            completion_calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn completing(completion: Value) -> Self {
        Self::with(Ok(TEST_GATEWAY_URL.to_string()), Ok(completion))
    }

    pub fn failing(err: UpstreamError) -> Self {
        Self::with(Ok(TEST_GATEWAY_URL.to_string()), Err(err))
    }

    pub fn unresolvable(err: UpstreamError) -> Self {
        Self::with(Err(err), Ok(Value::Null))
    }

    pub fn total_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst) + self.completion_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatGateway for MockGateway {
    async fn resolve_compatibility_url(&self, _gateway_id: &str) -> Result<String, UpstreamError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        self.resolution.clone()
    }

    async fn create_completion(
        &self,
        base_url: &str,
        request: &ChatCompletionRequest,
    ) -> Result<Value, UpstreamError> {
        self.completion_calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((base_url.to_string(), request.clone()));
        self.outcome.clone()
    }
}

pub(crate) fn test_gateway_config() -> GatewayConfig {
    GatewayConfig {
        gateway_id: "relay-gw".to_string(),
        gateway_token: "test-token".to_string(),
        account_id: "acct".to_string(),
        base_url: "https://gateway.test/v1".to_string(),
        model: "test-provider/test-model".to_string(),
    }
}

pub(crate) fn build_test_state(gateway: Arc<MockGateway>) -> AppState {
    AppState::new(gateway, test_gateway_config())
}
