//! JSON shapes returned by the gateway.

use serde::{Deserialize, Serialize};
use shared_types::KeyValuePair;

/// One record in a `/getAll` response. Binary fields are lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDto {
    pub key: String,
    pub value: String,
}

impl From<KeyValuePair> for RecordDto {
    fn from(pair: KeyValuePair) -> Self {
        Self {
            key: hex::encode(pair.key),
            value: hex::encode(pair.value),
        }
    }
}

impl RecordDto {
    /// Decode back into raw bytes.
    pub fn decode(&self) -> Result<KeyValuePair, hex::FromHexError> {
        Ok(KeyValuePair::new(hex::decode(&self.key)?, hex::decode(&self.value)?))
    }
}
