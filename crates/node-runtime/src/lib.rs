//! # Node Runtime Library
//!
//! Wires the storage engine into the HTTP gateway. The main entry point is
//! the `main.rs` binary; this library exposes the pieces for testing.
//!
//! ## Lifecycle
//!
//! 1. Validate `NodeConfig`
//! 2. Open the store once (RocksDB, or in-memory with `--in-memory`)
//! 3. Serve the gateway until the shutdown future resolves
//! 4. Drain in-flight requests, then drop the store (closing RocksDB)

pub mod adapters;
pub mod config;

use std::future::Future;
use std::sync::Arc;

use kv_02_namespaced_storage::{InMemoryKVStore, KVStoreError};
use kv_04_api_gateway::{ApiGatewayService, GatewayError, SharedStore};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

pub use config::{Args, ConfigError, NodeConfig, StorageConfig};

/// Runtime errors.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("storage: {0}")]
    Storage(#[from] KVStoreError),

    #[error("gateway: {0}")]
    Gateway(#[from] GatewayError),

    #[error("persistent storage requested but this build has no RocksDB support; use --in-memory")]
    PersistenceUnavailable,
}

/// An opened store plus the configuration to serve it.
pub struct NodeRuntime {
    config: NodeConfig,
    store: SharedStore,
}

impl NodeRuntime {
    /// Validate `config` and open the configured store.
    pub fn open(config: NodeConfig) -> Result<Self, NodeError> {
        config.validate()?;
        let store = open_store(&config.storage)?;
        Ok(Self { config, store })
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Build the gateway over the opened store.
    pub fn gateway(&self) -> Result<ApiGatewayService, NodeError> {
        Ok(ApiGatewayService::new(
            self.config.gateway.clone(),
            self.store.clone(),
        )?)
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> Result<(), NodeError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let gateway = self.gateway()?;
        let listener = gateway.bind().await?;
        self.serve_with(gateway, listener, shutdown).await
    }

    /// Serve on an already bound listener.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), NodeError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let gateway = self.gateway()?;
        self.serve_with(gateway, listener, shutdown).await
    }

    async fn serve_with<F>(
        self,
        gateway: ApiGatewayService,
        listener: TcpListener,
        shutdown: F,
    ) -> Result<(), NodeError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!(
            addr = %self.config.gateway.http_addr(),
            in_memory = self.config.storage.in_memory,
            "SigKV node starting"
        );

        let result = gateway.serve(listener, shutdown).await;

        // The gateway held the other handle; this drop closes the engine.
        drop(self.store);
        info!("Storage released");

        Ok(result?)
    }
}

fn open_store(config: &StorageConfig) -> Result<SharedStore, NodeError> {
    if config.in_memory {
        info!("Using in-memory storage; records are lost on exit");
        return Ok(Arc::new(InMemoryKVStore::new()));
    }

    open_persistent(config)
}

#[cfg(feature = "rocksdb")]
fn open_persistent(config: &StorageConfig) -> Result<SharedStore, NodeError> {
    use crate::adapters::storage::{RocksDbConfig, RocksDbStore};

    if let Some(parent) = config.path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| KVStoreError::IOError {
            message: format!("Failed to create {}: {e}", parent.display()),
        })?;
    }

    let store = RocksDbStore::open(RocksDbConfig::new(&config.path))?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "rocksdb"))]
fn open_persistent(_config: &StorageConfig) -> Result<SharedStore, NodeError> {
    Err(NodeError::PersistenceUnavailable)
}
