//! Port implementations owned by the runtime.

pub mod storage;
