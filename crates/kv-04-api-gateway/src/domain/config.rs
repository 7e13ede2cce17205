//! Gateway configuration with validation.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use kv_03_request_auth::{HEADER_LEN, MAX_FIELD_LEN};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8546;

/// Largest well-formed put: header, two length prefixes, two maximal fields.
pub const DEFAULT_MAX_BODY_BYTES: usize = HEADER_LEN + 4 + 2 * MAX_FIELD_LEN;

/// Smallest limit that still admits a put with an empty key and value.
pub const MIN_BODY_BYTES: usize = HEADER_LEN + 4;

/// HTTP gateway configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Bind address
    pub host: IpAddr,
    /// Listening port
    pub port: u16,
    /// Request bodies above this size get 413
    pub max_body_bytes: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl GatewayConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if self.max_body_bytes < MIN_BODY_BYTES {
            return Err(ConfigError::InvalidLimit(format!(
                "max_body_bytes {} is below the {MIN_BODY_BYTES}-byte empty put",
                self.max_body_bytes
            )));
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Configuration errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Port 0 would bind an unpredictable port
    #[error("port must be non-zero")]
    InvalidPort,
    /// Invalid size limit
    #[error("invalid limit: {0}")]
    InvalidLimit(String),
}
