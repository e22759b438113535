//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the module requires the host application to provide.

use crate::domain::KVStoreError;

/// Result of a prefix scan: `(key, value)` pairs in ascending key order.
pub type ScanResult = Vec<(Vec<u8>, Vec<u8>)>;

/// Byte-oriented key-value store shared by every module of the host.
///
/// Production: `FileBackedKVStore`, `RocksDbStore` (feature `rocksdb`)
/// Testing: `InMemoryKVStore`
///
/// A missing key reads as `None`, which is distinct from an empty value.
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Put a single key-value pair. Visible to every later `get` on this store.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError>;

    /// All entries whose key starts with `prefix`, ordered by key.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError>;
}
