use std::fs;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::models::LoggingConfig;

const LOG_FILE_PREFIX: &str = "relay.log";

struct LocalTimer;

impl tracing_subscriber::fmt::time::FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        let now = chrono::Local::now();
        write!(w, "{}", now.to_rfc3339())
    }
}

fn prepare_log_dir(dir: &str) -> Result<PathBuf, String> {
    let log_dir = PathBuf::from(dir);
    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)
            .map_err(|e| format!("Failed to create log directory: {}", e))?;
    }
    Ok(log_dir)
}

// Keep the returned guard alive for the process lifetime or buffered file
// output is dropped.
pub fn init_logger(config: &LoggingConfig) -> Option<WorkerGuard> {
    let _ = tracing_log::LogTracer::init();

    let (file_layer, guard) = match config.dir.as_deref().map(prepare_log_dir) {
        Some(Ok(log_dir)) => {
            let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .with_timer(LocalTimer);
            (Some(layer), Some(guard))
        }
        Some(Err(e)) => {
            eprintln!("Failed to initialize log directory: {}", e);
            (None, None)
        }
        None => (None, None),
    };

    let console_layer = fmt::Layer::new()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_timer(LocalTimer);
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_enabled = file_layer.is_some();
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    if file_enabled {
        info!("Log system initialized (Console + File persistence)");
    } else {
        info!("Log system initialized (Console)");
    }
    guard
}

pub fn log_error(message: &str) {
    if let Some(ctx) = crate::modules::system::request_context::try_get() {
        match (ctx.request_id.as_deref(), ctx.correlation_id.as_deref()) {
            (Some(request_id), Some(correlation_id)) => {
                error!(
                    request_id = %request_id,
                    correlation_id = %correlation_id,
                    "{}",
                    message
                );
            }
            (Some(request_id), None) => {
                error!(request_id = %request_id, "{}", message);
            }
            (None, Some(correlation_id)) => {
                error!(correlation_id = %correlation_id, "{}", message);
            }
            (None, None) => error!("{}", message),
        }
    } else {
        error!("{}", message);
    }
}
