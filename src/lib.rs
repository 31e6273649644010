pub mod constants;
pub mod error;
mod models;
mod modules;
mod proxy;
#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use error::{AppError, AppResult};
use models::AppConfig;
use modules::system::{config, logger, validation};
use tracing::{error, info};

async fn start_relay(config: AppConfig) -> AppResult<()> {
    validation::validate_app_config(&config).map_err(|errors| {
        AppError::Config(format!(
            "configuration_validation_failed:\n{}",
            validation::format_config_errors(&errors)
        ))
    })?;

    info!(
        "Relaying to gateway {} (model: {})",
        config.gateway.gateway_id, config.gateway.model
    );
    let gateway = Arc::new(proxy::HttpGatewayClient::new(&config.gateway)?);
    let state = proxy::AppState::new(gateway, config.gateway.clone());

    let (server, handle) = proxy::RelayServer::start(&config.server, state).await?;
    info!(
        "Chat relay is running at http://{}. Press Ctrl+C to exit.",
        server.local_addr
    );

    tokio::signal::ctrl_c().await?;
    info!("Shutting down chat relay");
    handle.abort();
    Ok(())
}

pub fn run() {
    let loaded = match config::load_app_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_guard = logger::init_logger(&loaded.config.logging);
    loaded.log_diagnostics();
    let config = loaded.config;

    let result = tokio::runtime::Runtime::new()
        .map_err(AppError::from)
        .and_then(|runtime| runtime.block_on(start_relay(config)));

    if let Err(e) = result {
        error!("{}", e);
        drop(log_guard);
        std::process::exit(1);
    }
}
