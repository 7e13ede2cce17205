//! # SigKV Telemetry
//!
//! Structured logging and Prometheus metrics.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kv_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_telemetry(TelemetryConfig::from_env()).expect("Failed to init telemetry");
//!     // Logs and metrics are now being collected
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `KV_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `KV_JSON_LOGS` | `false` (`true` in containers) | JSON log lines |
//! | `KV_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `KV_SERVICE_NAME` | `sigkv` | Service name in the startup log |

mod config;
pub mod metrics;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use metrics::{
    encode_metrics, record_request, register_metrics, MetricsHandle, RECORDS_CLEARED,
    RECORDS_WRITTEN, REQUESTS_TOTAL, REQUEST_DURATION, SIGNATURE_FAILURES, STORAGE_ERRORS,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracerInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and metrics.
///
/// Returns a guard that should be held for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    // Initialize metrics first
    let metrics_handle = register_metrics()?;

    tracing_setup::init_tracing(&config)?;

    Ok(TelemetryGuard {
        _metrics: metrics_handle,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    _metrics: MetricsHandle,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!("Shutting down telemetry...");
    }
}
