//! Cross-crate integration scenarios.

pub mod auth_storage;
pub mod crypto_interop;
pub mod http_scenarios;
