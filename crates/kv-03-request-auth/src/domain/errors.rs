//! # Authentication Errors

use kv_01_signature_verification::PointError;
use thiserror::Error;

/// Why a request was refused. All variants are raised before storage is
/// touched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Header shorter than 97 bytes, or an operation body that does not
    /// hold the lengths it declares.
    #[error("Malformed request: {0}")]
    MalformedHeader(&'static str),

    /// The public key bytes do not decode to a curve point.
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(#[from] PointError),

    /// The signature does not verify against the canonical message.
    #[error("Wrong signature")]
    SignatureMismatch,

    /// A put key or value longer than its u16 length prefix allows.
    #[error("Field {field} is {len} bytes, limit is 65535")]
    FieldTooLong { field: &'static str, len: usize },
}
