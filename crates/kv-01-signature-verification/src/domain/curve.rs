//! # Curve Parameters (secp256k1)
//!
//! Process-wide constants for y² = x³ + 7 over F_p.
//!
//! Values from SEC 2 section 2.4.1 (http://www.secg.org/sec2-v2.pdf).

use primitive_types::U256;

use super::point::CurvePoint;

/// Domain parameters of a short Weierstrass curve with a = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParameters {
    /// Field prime p.
    pub p: U256,
    /// Order n of the generator's subgroup.
    pub n: U256,
    /// Curve coefficient b.
    pub b: U256,
    /// Generator x-coordinate.
    pub gx: U256,
    /// Generator y-coordinate.
    pub gy: U256,
    /// (p + 1) / 4, the square-root exponent. Valid because p ≡ 3 (mod 4).
    pub sqrt_exponent: U256,
    /// Bit width of the field.
    pub bit_size: usize,
}

// Limbs are little-endian u64 words.

/// secp256k1 domain parameters.
pub const SECP256K1: CurveParameters = CurveParameters {
    // p = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F
    p: U256([
        0xFFFF_FFFE_FFFF_FC2F,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
    ]),
    // n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
    n: U256([
        0xBFD2_5E8C_D036_4141,
        0xBAAE_DCE6_AF48_A03B,
        0xFFFF_FFFF_FFFF_FFFE,
        0xFFFF_FFFF_FFFF_FFFF,
    ]),
    b: U256([7, 0, 0, 0]),
    // Gx = 0x79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798
    gx: U256([
        0x59F2_815B_16F8_1798,
        0x029B_FCDB_2DCE_28D9,
        0x55A0_6295_CE87_0B07,
        0x79BE_667E_F9DC_BBAC,
    ]),
    // Gy = 0x483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8
    gy: U256([
        0x9C47_D08F_FB10_D4B8,
        0xFD17_B448_A685_5419,
        0x5DA4_FBFC_0E11_08A8,
        0x483A_DA77_26A3_C465,
    ]),
    // (p + 1) / 4 = 0x3FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFBFFFFF0C
    sqrt_exponent: U256([
        0xFFFF_FFFF_BFFF_FF0C,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFF,
        0x3FFF_FFFF_FFFF_FFFF,
    ]),
    bit_size: 256,
};

impl CurveParameters {
    /// The generator point G.
    pub fn generator(&self) -> CurvePoint {
        CurvePoint::from_trusted(self.gx, self.gy)
    }
}
