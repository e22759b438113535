//! # Prefix Store
//!
//! Encoded store accessor scoped to one module's namespace.
//!
//! Every key is stored as `store_key + "/" + key` in the shared store. The
//! accessor never reads or writes outside that prefix, so modules sharing a
//! backend cannot observe or clobber each other's entries.

use crate::domain::{namespace_prefix, KVStoreError};
use crate::ports::{KeyValueStore, ScanResult};

/// Namespaced view over a shared `KeyValueStore`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixStore {
    prefix: Vec<u8>,
}

impl PrefixStore {
    pub fn new(store_key: &str) -> Self {
        Self {
            prefix: namespace_prefix(store_key),
        }
    }

    /// The namespace prefix, separator included.
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Full key in the shared store.
    pub fn full_key(&self, key: &[u8]) -> Vec<u8> {
        let mut full = Vec::with_capacity(self.prefix.len() + key.len());
        full.extend_from_slice(&self.prefix);
        full.extend_from_slice(key);
        full
    }

    /// Value under `key`; `None` when never set.
    pub fn get(
        &self,
        store: &dyn KeyValueStore,
        key: &[u8],
    ) -> Result<Option<Vec<u8>>, KVStoreError> {
        store.get(&self.full_key(key))
    }

    /// Write `value` under `key`.
    pub fn set(
        &self,
        store: &mut dyn KeyValueStore,
        key: &[u8],
        value: &[u8],
    ) -> Result<(), KVStoreError> {
        store.put(&self.full_key(key), value)
    }

    /// All entries of this namespace with the prefix stripped, in key order.
    pub fn entries(&self, store: &dyn KeyValueStore) -> Result<ScanResult, KVStoreError> {
        let scanned = store.prefix_scan(&self.prefix)?;
        Ok(scanned
            .into_iter()
            .map(|(k, v)| (k[self.prefix.len()..].to_vec(), v))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryKVStore;

    #[test]
    fn test_writes_are_namespaced() {
        let mut store = InMemoryKVStore::new();
        let ours = PrefixStore::new("safrochain");
        let theirs = PrefixStore::new("bank");

        ours.set(&mut store, b"key", b"mine").unwrap();
        theirs.set(&mut store, b"key", b"theirs").unwrap();

        assert_eq!(ours.get(&store, b"key").unwrap(), Some(b"mine".to_vec()));
        assert_eq!(theirs.get(&store, b"key").unwrap(), Some(b"theirs".to_vec()));
        assert_eq!(
            store.get(b"safrochain/key").unwrap(),
            Some(b"mine".to_vec())
        );
    }

    #[test]
    fn test_entries_strip_prefix() {
        let mut store = InMemoryKVStore::new();
        let ours = PrefixStore::new("safrochain");
        ours.set(&mut store, b"b", b"2").unwrap();
        ours.set(&mut store, b"a", b"1").unwrap();
        store.put(b"safrochainx/a", b"foreign").unwrap();

        let entries = ours.entries(&store).unwrap();
        assert_eq!(
            entries,
            vec![(b"a".to_vec(), b"1".to_vec()), (b"b".to_vec(), b"2".to_vec())]
        );
    }

    #[test]
    fn test_absent_distinct_from_empty() {
        let mut store = InMemoryKVStore::new();
        let ours = PrefixStore::new("safrochain");
        assert_eq!(ours.get(&store, b"p").unwrap(), None);

        ours.set(&mut store, b"p", &[]).unwrap();
        assert_eq!(ours.get(&store, b"p").unwrap(), Some(Vec::new()));
    }
}
