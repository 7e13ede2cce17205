//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::EcdsaSignature;
use crate::domain::point::CurvePoint;
use shared_types::Hash;

/// Signature Verification API.
///
/// Consumed by request authentication. Implementations must be thread-safe
/// (`Send + Sync`) since one verifier is shared across request handlers.
pub trait SignatureVerificationApi: Send + Sync {
    /// Check an ECDSA signature over a 32-byte digest.
    ///
    /// # Security
    /// - Rejects r or s outside [1, n-1]
    /// - Rejects the point at infinity as a public key
    fn verify(&self, digest: &Hash, signature: &EcdsaSignature, public_key: &CurvePoint) -> bool;
}
