//! Prometheus metrics for SigKV.
//!
//! All metrics follow the naming convention: `sigkv_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts,
    Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Requests by endpoint and outcome
    pub static ref REQUESTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("sigkv_requests_total", "Requests handled, by endpoint and outcome"),
        &["endpoint", "outcome"]  // outcome: ok/malformed/invalid_key/wrong_signature/storage_error
    ).expect("metric creation failed");

    /// Request handling time
    pub static ref REQUEST_DURATION: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "sigkv_request_duration_seconds",
            "Time spent authenticating and executing a request"
        ).buckets(exponential_buckets(0.0001, 2.0, 14).expect("valid buckets")),
        &["endpoint"]
    ).expect("metric creation failed");

    /// Signature verification failures (for alerting)
    pub static ref SIGNATURE_FAILURES: IntCounter = IntCounter::new(
        "sigkv_signature_failures_total",
        "Requests rejected because the signature did not verify"
    ).expect("metric creation failed");

    /// Records written by put
    pub static ref RECORDS_WRITTEN: IntCounter = IntCounter::new(
        "sigkv_records_written_total",
        "Records written through put"
    ).expect("metric creation failed");

    /// Records deleted by clear
    pub static ref RECORDS_CLEARED: IntCounter = IntCounter::new(
        "sigkv_records_cleared_total",
        "Records deleted through clear"
    ).expect("metric creation failed");

    /// Storage engine failures
    pub static ref STORAGE_ERRORS: IntCounter = IntCounter::new(
        "sigkv_storage_errors_total",
        "Storage engine errors surfaced to callers"
    ).expect("metric creation failed");
}

/// Handle proving the metrics were registered.
#[derive(Debug)]
pub struct MetricsHandle {
    _private: (),
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once; later calls find the metrics already present.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(REQUESTS_TOTAL.clone()),
        Box::new(REQUEST_DURATION.clone()),
        Box::new(SIGNATURE_FAILURES.clone()),
        Box::new(RECORDS_WRITTEN.clone()),
        Box::new(RECORDS_CLEARED.clone()),
        Box::new(STORAGE_ERRORS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle { _private: () })
}

/// Count one request outcome.
pub fn record_request(endpoint: &str, outcome: &str) {
    REQUESTS_TOTAL.with_label_values(&[endpoint, outcome]).inc();
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
