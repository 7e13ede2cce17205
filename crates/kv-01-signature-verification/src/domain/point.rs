//! # Point Codec
//!
//! Conversion between secp256k1 points and their 33-byte compressed form.
//!
//! ## Encoding
//!
//! ```text
//! byte 0      0x02 if y is even, 0x03 if y is odd
//! bytes 1..33 x as a 32-byte big-endian integer
//! ```
//!
//! Decompression recovers y as a square root of (x³ + b) mod p and picks the
//! root whose parity matches the prefix. Compression is canonical: equal
//! points always produce equal bytes, so the compressed form can serve as a
//! storage namespace.

use primitive_types::U256;
use shared_types::{CompressedPoint, COMPRESSED_POINT_LEN};

use super::curve::{CurveParameters, SECP256K1};
use super::errors::PointError;
use super::field::{curve_rhs, mul_mod, sqrt_mod};

const PREFIX_EVEN: u8 = 0x02;
const PREFIX_ODD: u8 = 0x03;

/// A secp256k1 point: either affine coordinates on the curve or the point at
/// infinity.
///
/// Affine values can only be built through checked constructors, so every
/// affine `CurvePoint` satisfies the curve equation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurvePoint(Repr);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Repr {
    Infinity,
    Affine { x: U256, y: U256 },
}

impl CurvePoint {
    /// The point at infinity (group identity).
    pub const fn infinity() -> Self {
        Self(Repr::Infinity)
    }

    /// Build an affine point, checking that it lies on secp256k1.
    pub fn from_coordinates(x: U256, y: U256) -> Result<Self, PointError> {
        let curve = &SECP256K1;
        if x >= curve.p || y >= curve.p {
            return Err(PointError::CoordinateOutOfRange);
        }
        if mul_mod(y, y, curve.p) != curve_rhs(x, curve) {
            return Err(PointError::NotOnCurve);
        }
        Ok(Self(Repr::Affine { x, y }))
    }

    /// Caller guarantees (x, y) is on the curve.
    pub(crate) const fn from_trusted(x: U256, y: U256) -> Self {
        Self(Repr::Affine { x, y })
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self.0, Repr::Infinity)
    }

    /// Affine coordinates, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(U256, U256)> {
        match self.0 {
            Repr::Infinity => None,
            Repr::Affine { x, y } => Some((x, y)),
        }
    }

    pub fn x(&self) -> Option<U256> {
        self.coordinates().map(|(x, _)| x)
    }

    pub fn y(&self) -> Option<U256> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Compressed 33-byte form. See [`compress`].
    pub fn compress(&self) -> Result<CompressedPoint, PointError> {
        compress(self)
    }
}

/// Encode a point as `prefix || x`.
///
/// Fails only for the point at infinity.
pub fn compress(point: &CurvePoint) -> Result<CompressedPoint, PointError> {
    let (x, y) = point.coordinates().ok_or(PointError::PointAtInfinity)?;

    let mut bytes = [0u8; COMPRESSED_POINT_LEN];
    bytes[0] = if y.bit(0) { PREFIX_ODD } else { PREFIX_EVEN };
    x.to_big_endian(&mut bytes[1..]);
    Ok(CompressedPoint::new(bytes))
}

/// Decode a 33-byte compressed point.
pub fn decompress(bytes: &[u8]) -> Result<CurvePoint, PointError> {
    decompress_with(bytes, &SECP256K1)
}

fn decompress_with(bytes: &[u8], curve: &CurveParameters) -> Result<CurvePoint, PointError> {
    if bytes.len() != COMPRESSED_POINT_LEN {
        return Err(PointError::InvalidLength(bytes.len()));
    }

    let want_odd = match bytes[0] {
        PREFIX_EVEN => false,
        PREFIX_ODD => true,
        other => return Err(PointError::InvalidPrefix(other)),
    };

    let x = U256::from_big_endian(&bytes[1..]);
    if x >= curve.p {
        return Err(PointError::CoordinateOutOfRange);
    }

    let root = sqrt_mod(curve_rhs(x, curve), curve).ok_or(PointError::NotOnCurve)?;

    // root == 0 only when x³ + b ≡ 0, which has no solution on secp256k1;
    // p - 0 would fall outside the field, so keep 0 as-is.
    let y = if root.bit(0) == want_odd || root.is_zero() {
        root
    } else {
        curve.p - root
    };

    Ok(CurvePoint::from_trusted(x, y))
}
