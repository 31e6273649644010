use std::sync::Arc;

use crate::models::GatewayConfig;
use crate::proxy::upstream::ChatGateway;

#[derive(Clone)]
pub struct CoreServices {
    pub gateway: Arc<dyn ChatGateway>,
}

#[derive(Clone)]
pub struct ConfigState {
    pub gateway: GatewayConfig,
}

// Axum application state
#[derive(Clone)]
pub struct AppState {
    pub core: Arc<CoreServices>,
    pub config: Arc<ConfigState>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn ChatGateway>, gateway_config: GatewayConfig) -> Self {
        Self {
            core: Arc::new(CoreServices { gateway }),
            config: Arc::new(ConfigState {
                gateway: gateway_config,
            }),
        }
    }
}

#[derive(Clone)]
pub struct ChatHandlerState {
    pub gateway: Arc<dyn ChatGateway>,
    pub config: Arc<ConfigState>,
}

impl axum::extract::FromRef<AppState> for ChatHandlerState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            gateway: state.core.gateway.clone(),
            config: state.config.clone(),
        }
    }
}
