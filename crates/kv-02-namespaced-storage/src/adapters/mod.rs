//! # Adapters Layer
//!
//! Production: RocksDbStore in node-runtime/adapters/storage/rocksdb_adapter.rs
//! Testing and `--in-memory` nodes: `InMemoryKVStore`

pub mod memory;
