//! Zoo Server - Main entry point

use anyhow::{Context, Result};
use axum::{extract::Request, ServiceExt};
use std::{net::SocketAddr, time::Duration};
use tokio::signal;
use tracing::info;
use zoo_common::logging::{init_logging, LogConfig};

use zoo_server::{
    api::{self, AppState},
    config::Config,
    storage,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Defaults for this binary; LOG_* environment variables take precedence
    let log_config = LogConfig::builder()
        .log_file_prefix("zoo-server")
        .filter_directives("zoo_server=debug,tower_http=debug,mongodb=info")
        .build();
    let log_config = LogConfig::from_env_with(log_config)?;

    let _log_guard = init_logging(&log_config)?;

    info!("Starting Zoo Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    let collections = storage::connect(&config.database)
        .await
        .with_context(|| format!("Failed to connect to MongoDB database '{}'", config.database.name))?;

    let state = AppState::new(collections, config.api.body_decoding);
    let app = api::app(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal(config.server.shutdown_timeout_secs))
        .await?;

    info!("Server shut down gracefully");

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal(timeout_secs: u64) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }

    info!("Waiting up to {} seconds for connections to close", timeout_secs);
    tokio::time::sleep(Duration::from_secs(timeout_secs.min(5))).await;
}
