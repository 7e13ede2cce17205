//! # Namespaced Store
//!
//! Scopes every operation to one caller's namespace (their compressed public
//! key). The namespace is prepended on write and stripped on read, so callers
//! only ever see their own user keys.
//!
//! ## Consistency
//!
//! `get_all` and `clear` are separate scans. A `put` that lands between a
//! caller's `get_all` and `clear` is deleted without having been observed.

use shared_types::{CompressedPoint, KeyValuePair, COMPRESSED_POINT_LEN};
use tracing::{debug, warn};

use super::errors::NamespaceError;
use crate::ports::outbound::KeyValueStore;

/// Identity-partitioned view over a `KeyValueStore`.
pub struct NamespacedStore<S: KeyValueStore> {
    engine: S,
}

impl<S: KeyValueStore> NamespacedStore<S> {
    pub fn new(engine: S) -> Self {
        Self { engine }
    }

    /// The underlying engine.
    pub fn engine(&self) -> &S {
        &self.engine
    }

    /// Store `value` under `namespace || key`, replacing any previous value.
    pub fn put(
        &self,
        namespace: &CompressedPoint,
        key: &[u8],
        value: &[u8],
    ) -> Result<(), NamespaceError> {
        let physical = physical_key(namespace, key);
        self.engine.put(&physical, value)?;
        debug!(
            namespace = %namespace,
            key_len = key.len(),
            value_len = value.len(),
            "Record stored"
        );
        Ok(())
    }

    /// Every record in the namespace, prefix stripped, ascending by key.
    pub fn get_all(&self, namespace: &CompressedPoint) -> Result<Vec<KeyValuePair>, NamespaceError> {
        let records: Vec<KeyValuePair> = self
            .engine
            .prefix_scan(namespace.as_bytes())?
            .into_iter()
            .map(|(key, value)| KeyValuePair::new(strip_namespace(key), value))
            .collect();
        debug!(namespace = %namespace, count = records.len(), "Namespace listed");
        Ok(records)
    }

    /// Delete every record in the namespace and return how many were removed.
    ///
    /// Stops at the first failed deletion without rolling back.
    pub fn clear(&self, namespace: &CompressedPoint) -> Result<usize, NamespaceError> {
        let keys = self.engine.prefix_scan(namespace.as_bytes())?;

        let mut removed = 0;
        for (key, _) in keys {
            if let Err(source) = self.engine.delete(&key) {
                warn!(namespace = %namespace, removed, error = %source, "Clear aborted");
                return Err(NamespaceError::ClearAborted { removed, source });
            }
            removed += 1;
        }

        debug!(namespace = %namespace, removed, "Namespace cleared");
        Ok(removed)
    }
}

fn physical_key(namespace: &CompressedPoint, key: &[u8]) -> Vec<u8> {
    let mut physical = Vec::with_capacity(COMPRESSED_POINT_LEN + key.len());
    physical.extend_from_slice(namespace.as_bytes());
    physical.extend_from_slice(key);
    physical
}

fn strip_namespace(mut physical: Vec<u8>) -> Vec<u8> {
    physical.drain(..COMPRESSED_POINT_LEN.min(physical.len()));
    physical
}
