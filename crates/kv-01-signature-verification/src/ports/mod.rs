//! # Ports Layer
//!
//! - `inbound`: API exposed to the request-authentication subsystem

pub mod inbound;
