use crate::models::{AppConfig, GatewayConfig, ServerConfig};
use std::fmt;

#[derive(Debug, Clone)]
pub struct ConfigError {
    pub field: String,
    pub message: String,
    pub actual_value: Option<String>,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.actual_value {
            Some(val) => write!(f, "  • {}: {} (got: {})", self.field, self.message, val),
            None => write!(f, "  • {}: {}", self.field, self.message),
        }
    }
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            actual_value: None,
        }
    }

    fn with_value(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl ToString,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            actual_value: Some(value.to_string()),
        }
    }
}

pub fn validate_app_config(config: &AppConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    validate_gateway_config(&config.gateway, &mut errors);
    validate_server_config(&config.server, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn format_config_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

// The token is never echoed back, even when invalid.
fn validate_gateway_config(config: &GatewayConfig, errors: &mut Vec<ConfigError>) {
    if config.gateway_id.trim().is_empty() {
        errors.push(ConfigError::new("gateway.gateway_id", "must not be empty"));
    }
    if config.gateway_token.trim().is_empty() {
        errors.push(ConfigError::new("gateway.gateway_token", "must not be empty"));
    }
    if config.account_id.trim().is_empty() {
        errors.push(ConfigError::new("gateway.account_id", "must not be empty"));
    }
    if config.model.trim().is_empty() {
        errors.push(ConfigError::new("gateway.model", "must not be empty"));
    }

    match url::Url::parse(config.base_url.trim()) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
        _ => errors.push(ConfigError::with_value(
            "gateway.base_url",
            "must be a valid HTTP(S) URL",
            &config.base_url,
        )),
    }
}

fn validate_server_config(config: &ServerConfig, errors: &mut Vec<ConfigError>) {
    if config.port == 0 {
        errors.push(ConfigError::with_value(
            "server.port",
            "must be between 1 and 65535",
            config.port,
        ));
    }
    if config.host.trim().is_empty() {
        errors.push(ConfigError::new("server.host", "must not be empty"));
    }
    if config.max_body_size == 0 {
        errors.push(ConfigError::with_value(
            "server.max_body_size",
            "must be greater than 0",
            config.max_body_size,
        ));
    }
}
