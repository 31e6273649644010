pub mod config;

pub use config::{AppConfig, GatewayConfig, LoggingConfig, ServerConfig};
