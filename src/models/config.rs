use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_CHAT_MODEL, DEFAULT_GATEWAY_BASE_URL};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

// Immutable for the life of the process once loaded.
#[derive(Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub gateway_id: String,
    #[serde(default)]
    pub gateway_token: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default = "default_gateway_base_url")]
    pub base_url: String,
    #[serde(default = "default_chat_model")]
    pub model: String,
}

fn default_gateway_base_url() -> String {
    DEFAULT_GATEWAY_BASE_URL.to_string()
}

fn default_chat_model() -> String {
    DEFAULT_CHAT_MODEL.to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            gateway_id: String::new(),
            gateway_token: String::new(),
            account_id: String::new(),
            base_url: default_gateway_base_url(),
            model: default_chat_model(),
        }
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("gateway_id", &self.gateway_id)
            .field("gateway_token", &"<redacted>")
            .field("account_id", &self.account_id)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_max_body_size() -> usize {
    1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_size: default_max_body_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub dir: Option<String>,
}
