//! # RocksDB Storage Adapter
//!
//! Persistent implementation of the kv-02 `KeyValueStore` port.
//!
//! ## Features
//!
//! - Snappy compression
//! - Bloom filters (10 bits per key) for point reads
//! - LRU block cache
//! - Repair-and-reopen when the database is found corrupted at startup
//!
//! Prefix scans seek to the prefix and stop at the first key that no longer
//! starts with it, so a namespace scan never walks the whole keyspace.

use std::path::PathBuf;

use kv_02_namespaced_storage::{KVStoreError, KeyValueStore, ScanResult};
use rocksdb::{
    BlockBasedOptions, Cache, DBCompressionType, Direction, ErrorKind, IteratorMode, Options,
    WriteOptions, DB,
};
use tracing::{info, warn};

/// RocksDB configuration
#[derive(Debug, Clone)]
pub struct RocksDbConfig {
    /// Path to the database directory
    pub path: PathBuf,
    /// Block cache size in bytes (default: 128MB)
    pub block_cache_size: usize,
    /// Write buffer size in bytes (default: 64MB)
    pub write_buffer_size: usize,
    /// Maximum number of write buffers (default: 3)
    pub max_write_buffer_number: i32,
    /// Maximum number of open files (default: 256)
    pub max_open_files: i32,
    /// fsync after each write
    pub sync_writes: bool,
}

impl RocksDbConfig {
    /// Production settings for the database at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            block_cache_size: 128 * 1024 * 1024, // 128MB
            write_buffer_size: 64 * 1024 * 1024, // 64MB
            max_write_buffer_number: 3,
            max_open_files: 256,
            sync_writes: true,
        }
    }

    /// Create config for testing (smaller buffers, no sync)
    pub fn for_testing(path: impl Into<PathBuf>) -> Self {
        Self {
            block_cache_size: 8 * 1024 * 1024,  // 8MB
            write_buffer_size: 4 * 1024 * 1024, // 4MB
            max_write_buffer_number: 2,
            max_open_files: 64,
            sync_writes: false,
            ..Self::new(path)
        }
    }

    fn options(&self) -> Options {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        opts.set_write_buffer_size(self.write_buffer_size);
        opts.set_max_write_buffer_number(self.max_write_buffer_number);
        opts.set_max_open_files(self.max_open_files);
        opts.set_compression_type(DBCompressionType::Snappy);

        let mut block_opts = BlockBasedOptions::default();
        block_opts.set_bloom_filter(10.0, false);
        block_opts.set_block_cache(&Cache::new_lru_cache(self.block_cache_size));
        opts.set_block_based_table_factory(&block_opts);

        opts
    }
}

/// RocksDB-backed key-value store.
///
/// The handle is closed when the last owner drops it.
pub struct RocksDbStore {
    db: DB,
    sync_writes: bool,
    path: PathBuf,
}

impl RocksDbStore {
    /// Open or create a database. A corrupted database is repaired and
    /// reopened once before giving up.
    pub fn open(config: RocksDbConfig) -> Result<Self, KVStoreError> {
        let opts = config.options();

        let db = match DB::open(&opts, &config.path) {
            Ok(db) => db,
            Err(e) if e.kind() == ErrorKind::Corruption => {
                warn!(path = %config.path.display(), error = %e, "Database corrupted, repairing");
                DB::repair(&opts, &config.path)
                    .map_err(|e| storage_error("RocksDB repair failed", e))?;
                info!(path = %config.path.display(), "Database repaired");
                DB::open(&opts, &config.path)
                    .map_err(|e| storage_error("Failed to reopen RocksDB", e))?
            }
            Err(e) => return Err(storage_error("Failed to open RocksDB", e)),
        };

        info!(path = %config.path.display(), "RocksDB opened");
        Ok(Self {
            db,
            sync_writes: config.sync_writes,
            path: config.path,
        })
    }

    fn write_options(&self) -> WriteOptions {
        let mut write_opts = WriteOptions::default();
        write_opts.set_sync(self.sync_writes);
        write_opts
    }
}

impl Drop for RocksDbStore {
    fn drop(&mut self) {
        info!(path = %self.path.display(), "RocksDB closed");
    }
}

impl KeyValueStore for RocksDbStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        self.db
            .get(key)
            .map_err(|e| storage_error("RocksDB get failed", e))
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        self.db
            .put_opt(key, value, &self.write_options())
            .map_err(|e| storage_error("RocksDB put failed", e))
    }

    fn delete(&self, key: &[u8]) -> Result<(), KVStoreError> {
        self.db
            .delete_opt(key, &self.write_options())
            .map_err(|e| storage_error("RocksDB delete failed", e))
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
        let mut results = Vec::new();

        for item in self.db.iterator(IteratorMode::From(prefix, Direction::Forward)) {
            let (key, value) = item.map_err(|e| storage_error("RocksDB scan failed", e))?;
            if !key.starts_with(prefix) {
                break;
            }
            results.push((key.to_vec(), value.to_vec()));
        }

        Ok(results)
    }
}

fn storage_error(context: &str, e: rocksdb::Error) -> KVStoreError {
    let message = format!("{context}: {e}");
    match e.kind() {
        ErrorKind::Corruption => KVStoreError::CorruptionError { message },
        _ => KVStoreError::IOError { message },
    }
}
