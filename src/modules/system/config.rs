use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::models::AppConfig;

const DATA_DIR: &str = ".chat-relay";
const CONFIG_FILE: &str = "config.json";
const CONFIG_PATH_ENV: &str = "RELAY_CONFIG_PATH";

/// Configuration plus what was noticed while loading it. Loading runs before
/// the logger exists, so the diagnostics are replayed by `log_diagnostics`.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    pub fn log_diagnostics(&self) {
        if let Some(path) = &self.source {
            info!("Loaded configuration file {}", path.display());
        }
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

pub fn get_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR))
}

fn env_value(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

fn env_number<T: std::str::FromStr>(key: &str, warnings: &mut Vec<String>) -> Option<T> {
    let raw = env_value(&[key])?;
    match raw.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warnings.push(format!("Ignoring invalid {} value: {}", key, raw));
            None
        }
    }
}

// An explicit path must exist; the default location is optional.
pub fn load_app_config() -> Result<LoadedConfig, String> {
    let source = match env_value(&[CONFIG_PATH_ENV]) {
        Some(path) => Some(PathBuf::from(path)),
        None => get_data_dir()
            .map(|dir| dir.join(CONFIG_FILE))
            .filter(|path| path.exists()),
    };
    let mut config = match &source {
        Some(path) => load_config_file(path)?,
        None => AppConfig::default(),
    };

    let warnings = apply_env_overrides(&mut config);
    Ok(LoadedConfig {
        config,
        source,
        warnings,
    })
}

pub fn load_config_file(path: &Path) -> Result<AppConfig, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("failed_to_read_config_file: {}", e))?;
    serde_json::from_str(&content).map_err(|e| format!("failed_to_parse_config_file: {}", e))
}

/// Applies environment overrides and returns the warnings for ignored values.
pub fn apply_env_overrides(config: &mut AppConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    if let Some(id) = env_value(&["GATEWAY_ID", "AI_GATEWAY_ID"]) {
        config.gateway.gateway_id = id;
    }
    if let Some(token) = env_value(&["GATEWAY_TOKEN", "AI_GATEWAY_TOKEN"]) {
        config.gateway.gateway_token = token;
    }
    if let Some(account) = env_value(&["GATEWAY_ACCOUNT_ID", "CF_ACCOUNT_ID"]) {
        config.gateway.account_id = account;
    }
    if let Some(base_url) = env_value(&["GATEWAY_BASE_URL"]) {
        config.gateway.base_url = base_url;
    }
    if let Some(model) = env_value(&["RELAY_MODEL"]) {
        config.gateway.model = model;
    }
    if let Some(host) = env_value(&["RELAY_HOST"]) {
        config.server.host = host;
    }
    if let Some(port) = env_number::<u16>("RELAY_PORT", &mut warnings) {
        config.server.port = port;
    }
    if let Some(size) = env_number::<usize>("RELAY_MAX_BODY_SIZE", &mut warnings) {
        config.server.max_body_size = size;
    }
    if let Some(dir) = env_value(&["RELAY_LOG_DIR"]) {
        config.logging.dir = Some(dir);
    }
    warnings
}
