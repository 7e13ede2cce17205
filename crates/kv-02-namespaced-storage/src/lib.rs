//! # Namespaced Storage Subsystem (KV-02)
//!
//! Key-value records partitioned by the caller's compressed public key.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): `NamespacedStore` and its errors
//! - **Ports Layer** (`ports/`): the `KeyValueStore` engine trait
//! - **Adapters Layer** (`adapters/`): `InMemoryKVStore`
//!
//! Production: `RocksDbStore` (node-runtime/adapters/storage/rocksdb_adapter.rs)
//!
//! ## Layout
//!
//! ```text
//! physical key = namespace (33 bytes) || user key
//! ```
//!
//! Every stored key begins with exactly one namespace, so a prefix scan over
//! one caller's compressed key can never reach another caller's records.

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-export public API
pub use adapters::memory::InMemoryKVStore;
pub use domain::errors::{KVStoreError, NamespaceError};
pub use domain::store::NamespacedStore;
pub use ports::outbound::{KeyValueStore, ScanResult};
