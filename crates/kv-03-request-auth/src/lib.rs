//! # Request Authentication Subsystem (KV-03)
//!
//! Turns a raw request body into an authorized storage operation.
//!
//! ## Wire Format
//!
//! ```text
//! bytes[0:32]   r  (big-endian)
//! bytes[32:64]  s  (big-endian)
//! bytes[64:97]  compressed public key
//! bytes[97:]    operation body
//!   put:    u16-LE keyLen, key, u16-LE valLen, value
//!   getAll: (empty)
//!   clear:  (empty)
//! ```
//!
//! ## Canonical Messages
//!
//! | operation | signed bytes |
//! |-----------|--------------|
//! | put       | the put body itself |
//! | getAll    | `"getAll"` |
//! | clear     | `"clear"` |
//!
//! The signature covers SHA-256 of the canonical message. The three shapes
//! never collide, so a signature for one operation cannot authorize another.
//!
//! ## Replay
//!
//! No nonce or timestamp is signed. A captured request stays valid forever
//! and re-applies with the same effect.

pub mod domain;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export public API
pub use domain::errors::AuthError;
pub use domain::header::{encode_header, parse_header, AuthContext, HEADER_LEN};
pub use domain::operation::{Operation, OperationKind, PutRecord, MAX_FIELD_LEN};
pub use service::{AuthorizedRequest, RequestAuthenticator};
