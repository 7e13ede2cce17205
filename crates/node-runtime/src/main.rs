//! # SigKV Node
//!
//! Key-value store partitioned by secp256k1 identity.
//!
//! ## Startup Sequence
//!
//! 1. Parse flags (with `KV_*` environment fallbacks)
//! 2. Initialize logging and metrics
//! 3. Open the store
//! 4. Serve `/put`, `/getAll`, `/clear` until Ctrl+C or SIGTERM

use anyhow::{Context, Result};
use clap::Parser;
use kv_telemetry::{init_telemetry, TelemetryConfig};
use tracing::{info, warn};

use node_runtime::{Args, NodeConfig, NodeRuntime};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _telemetry =
        init_telemetry(TelemetryConfig::from_env()).context("Failed to initialize telemetry")?;

    let config = NodeConfig::from_args(args);
    info!(
        database = %config.storage.path.display(),
        in_memory = config.storage.in_memory,
        "Configuration loaded"
    );

    let runtime = NodeRuntime::open(config).context("Failed to start node")?;
    runtime
        .run(shutdown_signal())
        .await
        .context("Node stopped with an error")?;

    info!("Shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
