// Gateway client backed by a single shared reqwest client.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use tokio::time::Duration;

use super::gateway::{ChatCompletionRequest, ChatGateway, UpstreamError};
use crate::constants::{CHAT_COMPLETIONS_PATH, GATEWAY_AUTH_HEADER, PLACEHOLDER_API_KEY};
use crate::error::{AppError, AppResult};
use crate::models::GatewayConfig;

pub struct HttpGatewayClient {
    client: Client,
    base_url: String,
    account_id: String,
    headers: header::HeaderMap,
}

impl HttpGatewayClient {
    // Configuration is fixed for the process, so the client and its headers
    // are built once and reused by every request.
    pub fn new(config: &GatewayConfig) -> AppResult<Self> {
        Ok(Self {
            client: Self::build_client()?,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            account_id: config.account_id.trim().to_string(),
            headers: Self::build_headers(&config.gateway_token)?,
        })
    }

    fn build_client() -> Result<Client, reqwest::Error> {
        Client::builder()
            .pool_max_idle_per_host(16)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .user_agent(crate::constants::USER_AGENT.as_str())
            .build()
    }

    fn build_headers(gateway_token: &str) -> AppResult<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", PLACEHOLDER_API_KEY))
                .map_err(|e| AppError::Config(e.to_string()))?,
        );

        let mut gateway_auth =
            header::HeaderValue::from_str(&format!("Bearer {}", gateway_token.trim()))
                .map_err(|_| {
                    AppError::Config("gateway token contains invalid header characters".to_string())
                })?;
        gateway_auth.set_sensitive(true);
        headers.insert(
            header::HeaderName::from_static(GATEWAY_AUTH_HEADER),
            gateway_auth,
        );

        Ok(headers)
    }

    fn build_url(base_url: &str, path: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl ChatGateway for HttpGatewayClient {
    async fn resolve_compatibility_url(&self, gateway_id: &str) -> Result<String, UpstreamError> {
        let gateway_id = gateway_id.trim();
        if gateway_id.is_empty() {
            return Err(UpstreamError::network("Gateway id is empty"));
        }

        let raw = format!("{}/{}/{}", self.base_url, self.account_id, gateway_id);
        let parsed = url::Url::parse(&raw)
            .map_err(|e| UpstreamError::network(format!("Invalid gateway URL {}: {}", raw, e)))?;
        Ok(parsed.as_str().trim_end_matches('/').to_string())
    }

    async fn create_completion(
        &self,
        base_url: &str,
        request: &ChatCompletionRequest,
    ) -> Result<Value, UpstreamError> {
        let url = Self::build_url(base_url, CHAT_COMPLETIONS_PATH);

        let response = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable body just means there is nothing to forward.
            let body = response.text().await.ok();
            tracing::debug!("Upstream {} returned {}", url, status);
            return Err(UpstreamError::provider(status.as_u16(), body));
        }

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| UpstreamError::parse(format!("Invalid completion payload: {}", e)))
    }
}
