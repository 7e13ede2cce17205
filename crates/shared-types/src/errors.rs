//! # Error Types
//!
//! Errors raised while building shared value types from untrusted bytes.

use thiserror::Error;

/// Errors constructing a [`crate::CompressedPoint`] from raw bytes.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// Input is not exactly 33 bytes.
    #[error("Compressed point must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
