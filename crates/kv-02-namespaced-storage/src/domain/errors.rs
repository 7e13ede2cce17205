//! # Storage Errors

use thiserror::Error;

/// Key-value engine errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },

    /// Data corruption in the store.
    #[error("KV store corruption: {message}")]
    CorruptionError { message: String },
}

/// Errors surfaced by `NamespacedStore`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NamespaceError {
    /// The engine rejected a read or write.
    #[error("Storage failure: {0}")]
    Storage(#[from] KVStoreError),

    /// `clear` stopped at the first failed deletion. Records already removed
    /// stay removed.
    #[error("Clear aborted after removing {removed} records: {source}")]
    ClearAborted {
        removed: usize,
        #[source]
        source: KVStoreError,
    },
}
