//! # Request Header
//!
//! The fixed 97-byte prefix of every authenticated request.

use kv_01_signature_verification::{decompress, CurvePoint, EcdsaSignature};
use shared_types::{CompressedPoint, COMPRESSED_POINT_LEN, SCALAR_LEN};

use super::errors::AuthError;

/// r (32) + s (32) + compressed public key (33).
pub const HEADER_LEN: usize = 2 * SCALAR_LEN + COMPRESSED_POINT_LEN;

const R_RANGE: std::ops::Range<usize> = 0..SCALAR_LEN;
const S_RANGE: std::ops::Range<usize> = SCALAR_LEN..2 * SCALAR_LEN;
const KEY_RANGE: std::ops::Range<usize> = 2 * SCALAR_LEN..HEADER_LEN;

/// Per-request authentication state: who claims to be calling and the
/// signature they offer. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Decoded caller key.
    pub public_key: CurvePoint,
    /// The caller's compressed key exactly as sent; this is their namespace.
    pub namespace: CompressedPoint,
    pub signature: EcdsaSignature,
}

/// Split a request into its authentication context and the remaining
/// operation body.
///
/// Fails with `MalformedHeader` when fewer than 97 bytes are present and with
/// `InvalidPublicKey` when the key bytes do not decode.
pub fn parse_header(request: &[u8]) -> Result<(AuthContext, &[u8]), AuthError> {
    if request.len() < HEADER_LEN {
        return Err(AuthError::MalformedHeader("request shorter than 97-byte header"));
    }
    let (header, body) = request.split_at(HEADER_LEN);

    let mut r = [0u8; SCALAR_LEN];
    let mut s = [0u8; SCALAR_LEN];
    r.copy_from_slice(&header[R_RANGE]);
    s.copy_from_slice(&header[S_RANGE]);

    let key_bytes = &header[KEY_RANGE];
    let public_key = decompress(key_bytes)?;
    let namespace = CompressedPoint::from_slice(key_bytes)
        .map_err(|_| AuthError::MalformedHeader("public key field has wrong length"))?;

    let context = AuthContext {
        public_key,
        namespace,
        signature: EcdsaSignature::new(r, s),
    };
    Ok((context, body))
}

/// Serialize a header. Inverse of [`parse_header`] for well-formed input.
pub fn encode_header(signature: &EcdsaSignature, namespace: &CompressedPoint) -> Vec<u8> {
    let mut header = Vec::with_capacity(HEADER_LEN);
    header.extend_from_slice(&signature.to_bytes());
    header.extend_from_slice(namespace.as_bytes());
    header
}
