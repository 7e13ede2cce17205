//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Crypto**: `Hash`, `CompressedPoint`
//! - **Storage**: `KeyValuePair`

use crate::errors::EncodingError;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CLUSTER A: CRYPTO
// =============================================================================

/// A 32-byte hash (SHA-256 digest of a canonical message).
pub type Hash = [u8; 32];

/// Length of a compressed secp256k1 point: parity byte + 32-byte x.
pub const COMPRESSED_POINT_LEN: usize = 33;

/// Length of a big-endian signature scalar (r or s).
pub const SCALAR_LEN: usize = 32;

/// A compressed secp256k1 public key as it appears on the wire.
///
/// This type only guarantees the length. Whether the bytes decode to a curve
/// point is decided by the point codec.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompressedPoint(#[serde(with = "hex_array")] [u8; COMPRESSED_POINT_LEN]);

impl CompressedPoint {
    /// Wrap an owned 33-byte array.
    pub const fn new(bytes: [u8; COMPRESSED_POINT_LEN]) -> Self {
        Self(bytes)
    }

    /// Copy from a slice, failing unless it is exactly 33 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, EncodingError> {
        let array: [u8; COMPRESSED_POINT_LEN] =
            bytes.try_into().map_err(|_| EncodingError::InvalidLength {
                expected: COMPRESSED_POINT_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; COMPRESSED_POINT_LEN] {
        &self.0
    }

    /// Lowercase hex rendering, used in logs.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for CompressedPoint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for CompressedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompressedPoint({})", self.to_hex())
    }
}

impl fmt::Display for CompressedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// =============================================================================
// CLUSTER B: STORAGE
// =============================================================================

/// A key/value pair as returned from a namespace, with the prefix stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl KeyValuePair {
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

mod hex_array {
    use super::COMPRESSED_POINT_LEN;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        bytes: &[u8; COMPRESSED_POINT_LEN],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[u8; COMPRESSED_POINT_LEN], D::Error> {
        let text = String::deserialize(deserializer)?;
        let bytes = hex::decode(&text).map_err(D::Error::custom)?;
        bytes
            .as_slice()
            .try_into()
            .map_err(|_| D::Error::invalid_length(bytes.len(), &"33 bytes"))
    }
}
