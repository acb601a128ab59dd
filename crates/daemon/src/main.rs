//! Handoff Daemon - Main Entry Point
//! Serves named blocking queues to out-of-process workers over JSON-RPC

mod config;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{DaemonConfig, LogFormat};
use handoff_api_rpc::RpcServer;
use handoff_core::port::QueueStore;
use handoff_core::QueueRegistry;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = DaemonConfig::from_env()?;

    // 2. Initialize logging
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new("handoff_core=info,handoff_api_rpc=info,handoff_daemon=info")
    })?;

    match config.log_format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("Handoff v{} starting...", VERSION);

    // 3. Setup dependencies (DI wiring): one registry for the whole process
    let store: Arc<dyn QueueStore> = Arc::new(QueueRegistry::new());

    // 4. Start JSON-RPC server
    let rpc_server = RpcServer::new(config.rpc, store.clone());
    let (addr, rpc_handle) = rpc_server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(addr = %addr, "✅ System ready. Waiting for workers...");
    info!("Press Ctrl+C to shutdown");

    // 5. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!(
        queues = store.list_names().len(),
        "Shutdown signal received. Exiting gracefully..."
    );

    // 6. Graceful shutdown (queued items are dropped with the process)
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;

    info!("Shutdown complete.");

    Ok(())
}
