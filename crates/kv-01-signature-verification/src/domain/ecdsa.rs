//! # ECDSA Verification (secp256k1)
//!
//! Pure domain logic for ECDSA signature verification.
//!
//! ## Verification Equation
//!
//! ```text
//! w  = s⁻¹ mod n
//! u1 = z·w mod n          (z = digest as a big-endian integer, reduced mod n)
//! u2 = r·w mod n
//! Q  = u1·G + u2·PubKey
//! valid  ⇔  Q ≠ ∞  ∧  Q.x mod n = r
//! ```
//!
//! ## Security Notes
//!
//! - **Scalar Range Validation**: r and s must be in [1, n-1]
//! - **Public Key Validation**: the point at infinity is rejected outright
//! - High-s signatures are accepted; both (r, s) and (r, n-s) verify
//! - Uses k256 crate for scalar and group operations

use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::point::AffineCoordinates;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::elliptic_curve::PrimeField;
use k256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar};
use primitive_types::U256;
use shared_types::Hash;

use super::entities::EcdsaSignature;
use super::errors::PointError;
use super::point::CurvePoint;
use crate::ports::inbound::SignatureVerificationApi;

// =============================================================================
// ECDSA VERIFIER
// =============================================================================

/// ECDSA signature verifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcdsaVerifier;

impl EcdsaVerifier {
    /// Create a new ECDSA verifier.
    pub fn new() -> Self {
        Self
    }
}

impl SignatureVerificationApi for EcdsaVerifier {
    fn verify(&self, digest: &Hash, signature: &EcdsaSignature, public_key: &CurvePoint) -> bool {
        verify_ecdsa(digest, signature, public_key)
    }
}

// =============================================================================
// CORE VERIFICATION
// =============================================================================

/// Verify an ECDSA signature over a 32-byte digest.
///
/// Returns `false` for every invalid input, including out-of-range scalars
/// and the point at infinity. Never panics.
pub fn verify_ecdsa(digest: &Hash, signature: &EcdsaSignature, public_key: &CurvePoint) -> bool {
    if public_key.is_infinity() {
        tracing::debug!("Rejecting signature: public key is the point at infinity");
        return false;
    }

    let (Some(r), Some(s)) = (parse_scalar(&signature.r), parse_scalar(&signature.s)) else {
        tracing::debug!("Rejecting signature: r or s outside [1, n-1]");
        return false;
    };

    let Some(public_key) = to_k256_point(public_key) else {
        return false;
    };

    let Some(w) = Option::<Scalar>::from(s.invert()) else {
        return false;
    };

    let z = reduce_to_scalar(&FieldBytes::from(*digest));
    let u1 = z * w;
    let u2 = r * w;

    let q = ProjectivePoint::GENERATOR * u1 + ProjectivePoint::from(public_key) * u2;
    if q == ProjectivePoint::IDENTITY {
        return false;
    }

    reduce_to_scalar(&q.to_affine().x()) == r
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Parse a big-endian scalar, rejecting 0 and anything ≥ n.
fn parse_scalar(bytes: &[u8; 32]) -> Option<Scalar> {
    let scalar: Option<Scalar> = Scalar::from_repr(FieldBytes::from(*bytes)).into();
    scalar.filter(|value| !bool::from(value.is_zero()))
}

fn reduce_to_scalar(bytes: &FieldBytes) -> Scalar {
    <Scalar as Reduce<k256::U256>>::reduce_bytes(bytes)
}

fn field_bytes(value: U256) -> FieldBytes {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    FieldBytes::from(bytes)
}

fn to_k256_point(point: &CurvePoint) -> Option<AffinePoint> {
    let (x, y) = point.coordinates()?;
    let encoded = EncodedPoint::from_affine_coordinates(&field_bytes(x), &field_bytes(y), false);
    AffinePoint::from_encoded_point(&encoded).into()
}

impl TryFrom<&AffinePoint> for CurvePoint {
    type Error = PointError;

    fn try_from(point: &AffinePoint) -> Result<Self, Self::Error> {
        let encoded = point.to_encoded_point(false);
        match (encoded.x(), encoded.y()) {
            (Some(x), Some(y)) => CurvePoint::from_coordinates(
                U256::from_big_endian(x.as_slice()),
                U256::from_big_endian(y.as_slice()),
            ),
            _ => Ok(CurvePoint::infinity()),
        }
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
