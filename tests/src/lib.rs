//! # SigKV Test Suite
//!
//! Scenarios that span more than one crate.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── crypto_interop.rs   # kv-01 against the k256 reference
//!     ├── auth_storage.rs     # kv-03 authorization feeding kv-02 storage
//!     └── http_scenarios.rs   # node-runtime + gateway over RocksDB
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p kv-tests
//! cargo bench -p kv-tests
//! ```

pub mod integration;
