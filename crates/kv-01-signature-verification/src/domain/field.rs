//! # Prime Field Arithmetic
//!
//! Modular arithmetic over 256-bit operands, used by point decompression.
//! Products are formed in 512 bits and reduced, so no operand needs to be
//! pre-reduced below the modulus.
//!
//! These routines are variable-time. They only ever see public data
//! (coordinates of public keys).

use primitive_types::{U256, U512};

use super::curve::CurveParameters;

fn narrow(wide: U512) -> U256 {
    let mut bytes = [0u8; 64];
    wide.to_big_endian(&mut bytes);
    U256::from_big_endian(&bytes[32..])
}

/// (a + b) mod m
pub fn add_mod(a: U256, b: U256, m: U256) -> U256 {
    narrow((U512::from(a) + U512::from(b)) % U512::from(m))
}

/// (a · b) mod m
pub fn mul_mod(a: U256, b: U256, m: U256) -> U256 {
    narrow(a.full_mul(b) % U512::from(m))
}

/// base^exp mod m, left-to-right square and multiply.
pub fn pow_mod(base: U256, exp: U256, m: U256) -> U256 {
    let base = base % m;
    let mut acc = U256::one() % m;
    for i in (0..256).rev() {
        acc = mul_mod(acc, acc, m);
        if exp.bit(i) {
            acc = mul_mod(acc, base, m);
        }
    }
    acc
}

/// Square root of `a` modulo the curve prime, if one exists.
///
/// Uses a^((p+1)/4), which is a root whenever a is a quadratic residue
/// and p ≡ 3 (mod 4). The candidate is squared back to detect non-residues.
pub fn sqrt_mod(a: U256, curve: &CurveParameters) -> Option<U256> {
    let a = a % curve.p;
    let root = pow_mod(a, curve.sqrt_exponent, curve.p);
    (mul_mod(root, root, curve.p) == a).then_some(root)
}

/// Right-hand side of the curve equation: (x³ + b) mod p.
pub fn curve_rhs(x: U256, curve: &CurveParameters) -> U256 {
    let x_cubed = mul_mod(mul_mod(x, x, curve.p), x, curve.p);
    add_mod(x_cubed, curve.b, curve.p)
}
