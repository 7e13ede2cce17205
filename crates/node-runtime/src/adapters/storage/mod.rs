//! # Storage Adapters
//!
//! Production storage backends for the `KeyValueStore` port.
//!
//! ## Available Backends
//!
//! - `RocksDbStore`: persistent, enabled with the `rocksdb` feature (default)
//! - `InMemoryKVStore` (from kv-02): volatile, for `--in-memory` runs

#[cfg(feature = "rocksdb")]
mod rocksdb_adapter;

#[cfg(feature = "rocksdb")]
pub use rocksdb_adapter::{RocksDbConfig, RocksDbStore};
