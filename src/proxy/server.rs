use axum::{extract::DefaultBodyLimit, Router};
use std::net::SocketAddr;
use tracing::{debug, error};

use crate::error::{AppError, AppResult};
use crate::models::ServerConfig;
use crate::proxy::middleware::{cors_layer, request_context_middleware};
use crate::proxy::routes::{build_api_routes, build_health_routes};
use crate::proxy::state::AppState;

pub fn build_router(state: AppState, max_body_size: usize) -> Router {
    Router::new()
        .nest("/api", build_api_routes())
        .merge(build_health_routes())
        .layer(axum::middleware::from_fn(request_context_middleware))
        .layer(cors_layer())
        .layer(DefaultBodyLimit::max(max_body_size))
        .with_state(state)
}

pub struct RelayServer {
    pub local_addr: SocketAddr,
}

impl RelayServer {
    pub async fn start(
        config: &ServerConfig,
        state: AppState,
    ) -> AppResult<(Self, tokio::task::JoinHandle<()>)> {
        tracing::info!("Request body size limit: {} bytes", config.max_body_size);
        let app = build_router(state, config.max_body_size);

        let addr = format!("{}:{}", config.host, config.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::Server(format!("Address {} binding failed: {}", addr, e)))?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Chat relay started at http://{}", local_addr);

        let handle = tokio::spawn(async move {
            use hyper::server::conn::http1;
            use hyper_util::rt::TokioIo;
            use hyper_util::service::TowerToHyperService;

            loop {
                match listener.accept().await {
                    Ok((stream, remote_addr)) => {
                        let io = TokioIo::new(stream);
                        use hyper::body::Incoming;
                        use tower::ServiceExt;
                        let app_with_info = app.clone().map_request(
                            move |mut req: axum::http::Request<Incoming>| {
                                req.extensions_mut()
                                    .insert(axum::extract::ConnectInfo(remote_addr));
                                req
                            },
                        );

                        let service = TowerToHyperService::new(app_with_info);

                        tokio::task::spawn(async move {
                            if let Err(err) = http1::Builder::new()
                                .serve_connection(io, service)
                                .await
                            {
                                debug!("Connection handling ended or failed: {:?}", err);
                            }
                        });
                    }
                    Err(e) => {
                        error!("Failed to accept connection: {:?}", e);
                    }
                }
            }
        });

        Ok((Self { local_addr }, handle))
    }
}
