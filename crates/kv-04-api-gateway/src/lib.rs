//! # API Gateway (KV-04)
//!
//! HTTP surface of SigKV.
//!
//! | endpoint | success | errors |
//! |----------|---------|--------|
//! | `POST /put` | 200, empty | 400, 403 `Wrong signature`, 500 |
//! | `POST /getAll` | 200, `[{"key":"<hex>","value":"<hex>"}]` | 400, 403, 500 |
//! | `POST /clear` | 200, empty | 400, 403, 500 |
//! | `GET /health` | 200 `{"status":"ok"}` | |
//! | `GET /metrics` | 200 Prometheus text | |
//!
//! Bodies larger than `max_body_bytes` are refused with 413 before any
//! handler runs.

pub mod domain;
pub mod handlers;
pub mod service;

pub use domain::config::{ConfigError, GatewayConfig, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT};
pub use domain::dto::RecordDto;
pub use domain::error::{ApiError, GatewayError};
pub use handlers::{AppState, SharedStore};
pub use service::{build_router, ApiGatewayService};
