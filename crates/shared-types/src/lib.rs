//! # Shared Types Crate
//!
//! Value types that cross crate boundaries in SigKV.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the 33-byte compressed key is defined once and
//!   used both as the caller identity and as the storage namespace prefix.
//! - **No Crypto Here**: these are plain byte containers. Curve validation lives
//!   in `kv-01-signature-verification`.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
