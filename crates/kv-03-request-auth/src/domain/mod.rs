//! # Domain Layer
//!
//! Header parsing and canonical message construction. No I/O.

pub mod errors;
pub mod header;
pub mod operation;
