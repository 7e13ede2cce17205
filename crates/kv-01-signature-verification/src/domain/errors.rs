//! # Point Errors
//!
//! Error types for point encoding and decoding.

use thiserror::Error;

/// Errors produced by the point codec.
///
/// Every decode failure is an invalid-encoding condition; the variants say
/// which check rejected the input.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PointError {
    /// Input is not exactly 33 bytes.
    #[error("Invalid point encoding: expected 33 bytes, got {0}")]
    InvalidLength(usize),

    /// Prefix byte is not 0x02 or 0x03.
    #[error("Invalid point encoding: prefix {0:#04x} is not 0x02 or 0x03")]
    InvalidPrefix(u8),

    /// x-coordinate is not below the field prime.
    #[error("Invalid point encoding: x-coordinate is not a field element")]
    CoordinateOutOfRange,

    /// x³ + b has no square root, or (x, y) fails the curve equation.
    #[error("Invalid point encoding: point is not on the curve")]
    NotOnCurve,

    /// The point at infinity has no compressed form.
    #[error("Point at infinity cannot be compressed")]
    PointAtInfinity,
}
