//! # Ports Layer
//!
//! - `outbound`: the ordered key-value engine this subsystem needs

pub mod outbound;
