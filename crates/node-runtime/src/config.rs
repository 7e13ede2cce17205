//! # Node Configuration
//!
//! Command-line flags, each with an environment fallback, folded into a
//! validated `NodeConfig`.
//!
//! | flag | env | default |
//! |------|-----|---------|
//! | `--port` | `KV_PORT` | 8546 |
//! | `--bind` | `KV_BIND` | `0.0.0.0` |
//! | `--database` | `KV_DATABASE` | `$HOME/.kv/database` |
//! | `--in-memory` | `KV_IN_MEMORY` | `false` |
//! | `--max-body-bytes` | `KV_MAX_BODY_BYTES` | 131171 |

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use kv_04_api_gateway::{GatewayConfig, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT};
use thiserror::Error;

/// SigKV node: a key-value store partitioned by secp256k1 identity.
#[derive(Parser, Debug, Clone)]
#[command(name = "node-runtime", version)]
#[command(about = "Serve a key-value store where every request is signed by its owner")]
pub struct Args {
    /// HTTP listening port
    #[arg(short, long, env = "KV_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "KV_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// RocksDB directory [default: $HOME/.kv/database]
    #[arg(short, long, env = "KV_DATABASE")]
    pub database: Option<PathBuf>,

    /// Keep records in memory only
    #[arg(long, env = "KV_IN_MEMORY")]
    pub in_memory: bool,

    /// Largest accepted request body in bytes
    #[arg(long, env = "KV_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeConfig {
    /// HTTP gateway configuration.
    pub gateway: GatewayConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// RocksDB directory.
    pub path: PathBuf,
    /// Use the volatile in-memory engine instead of RocksDB.
    pub in_memory: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(std::env::var_os("HOME").map(PathBuf::from).as_deref()),
            in_memory: false,
        }
    }
}

/// `<home>/.kv/database`, or `./.kv/database` without a home directory.
pub fn default_database_path(home: Option<&Path>) -> PathBuf {
    home.unwrap_or_else(|| Path::new("."))
        .join(".kv")
        .join("database")
}

impl NodeConfig {
    pub fn from_args(args: Args) -> Self {
        let storage = match args.database {
            Some(path) => StorageConfig {
                path,
                in_memory: args.in_memory,
            },
            None => StorageConfig {
                in_memory: args.in_memory,
                ..StorageConfig::default()
            },
        };

        Self {
            gateway: GatewayConfig {
                host: args.bind,
                port: args.port,
                max_body_bytes: args.max_body_bytes,
            },
            storage,
        }
    }

    /// Validate before anything is opened or bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gateway.validate()?;

        if !self.storage.in_memory && self.storage.path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDatabasePath);
        }

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("gateway: {0}")]
    Gateway(#[from] kv_04_api_gateway::ConfigError),

    #[error("database path is empty")]
    EmptyDatabasePath,
}
