//! # Domain Entities
//!
//! Core data structures for signature verification.

use shared_types::SCALAR_LEN;

/// ECDSA signature on the secp256k1 curve, as carried in the request header.
///
/// Components are raw big-endian bytes; range checks happen at verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcdsaSignature {
    /// R component (32 bytes)
    pub r: [u8; SCALAR_LEN],
    /// S component (32 bytes)
    pub s: [u8; SCALAR_LEN],
}

impl EcdsaSignature {
    pub fn new(r: [u8; SCALAR_LEN], s: [u8; SCALAR_LEN]) -> Self {
        Self { r, s }
    }

    /// Split a 64-byte `r || s` encoding.
    pub fn from_bytes(bytes: &[u8; 2 * SCALAR_LEN]) -> Self {
        let mut r = [0u8; SCALAR_LEN];
        let mut s = [0u8; SCALAR_LEN];
        r.copy_from_slice(&bytes[..SCALAR_LEN]);
        s.copy_from_slice(&bytes[SCALAR_LEN..]);
        Self { r, s }
    }

    /// Concatenated `r || s`.
    pub fn to_bytes(&self) -> [u8; 2 * SCALAR_LEN] {
        let mut bytes = [0u8; 2 * SCALAR_LEN];
        bytes[..SCALAR_LEN].copy_from_slice(&self.r);
        bytes[SCALAR_LEN..].copy_from_slice(&self.s);
        bytes
    }
}
