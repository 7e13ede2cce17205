//! # Domain Layer
//!
//! Pure cryptographic logic with no I/O dependencies.

pub mod curve;
pub mod ecdsa;
pub mod entities;
pub mod errors;
pub mod field;
pub mod point;
