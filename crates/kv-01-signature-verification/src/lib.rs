//! # Signature Verification Subsystem (KV-01)
//!
//! secp256k1 point compression and ECDSA verification for SigKV.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure curve and signature logic, no I/O
//! - **Ports Layer** (`ports/`): The verification trait consumed by request authentication
//!
//! ## Security Notes
//!
//! - **Canonical Decompression**: y is recovered from (x³ + 7) mod p, never from x alone
//! - **Scalar Range Validation**: r and s must be in [1, n-1]
//! - **Curve Membership**: affine points can only be built through checked constructors
//! - Group and scalar arithmetic is delegated to the `k256` crate

pub mod domain;
pub mod ports;

// Re-export public API
pub use domain::curve::{CurveParameters, SECP256K1};
pub use domain::ecdsa::{verify_ecdsa, EcdsaVerifier};
pub use domain::entities::EcdsaSignature;
pub use domain::errors::PointError;
pub use domain::point::{compress, decompress, CurvePoint};
pub use ports::inbound::SignatureVerificationApi;
