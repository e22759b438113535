use crate::domain::KVStoreError;
use crate::ports::{KeyValueStore, ScanResult};
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// File-backed key-value store for nodes built without RocksDB.
///
/// The whole map is rewritten on every `put` via a temp file and an atomic
/// rename, so a crash leaves either the old or the new file.
///
/// ## On-disk format
///
/// `[key_len:u32 LE][key][value_len:u32 LE][value]...` in ascending key order.
/// Identical contents always produce an identical file.
pub struct FileBackedKVStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
    path: PathBuf,
}

impl FileBackedKVStore {
    /// Open the store at `path`, creating it on first write.
    ///
    /// A truncated or otherwise malformed file is an error, not an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, KVStoreError> {
        let path = path.as_ref().to_path_buf();

        let data = match std::fs::File::open(&path) {
            Ok(mut file) => {
                let mut bytes = Vec::new();
                file.read_to_end(&mut bytes).map_err(io_error)?;
                let data = Self::decode(&bytes)?;
                tracing::info!(
                    "[safrochain] Loaded {} keys from {} ({} bytes)",
                    data.len(),
                    path.display(),
                    bytes.len()
                );
                data
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "[safrochain] No existing storage file at {}",
                    path.display()
                );
                BTreeMap::new()
            }
            Err(e) => return Err(io_error(e)),
        };

        Ok(Self { data, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(bytes: &[u8]) -> Result<BTreeMap<Vec<u8>, Vec<u8>>, KVStoreError> {
        let mut data = BTreeMap::new();
        let mut cursor = 0;

        while cursor < bytes.len() {
            let key = Self::read_chunk(bytes, &mut cursor)?;
            let value = Self::read_chunk(bytes, &mut cursor)?;
            data.insert(key, value);
        }

        Ok(data)
    }

    fn read_chunk(bytes: &[u8], cursor: &mut usize) -> Result<Vec<u8>, KVStoreError> {
        let truncated = |at: usize| KVStoreError::CorruptionError {
            message: format!("storage file truncated at offset {}", at),
        };

        let len_end = cursor.checked_add(4).ok_or_else(|| truncated(*cursor))?;
        let len_bytes: [u8; 4] = bytes
            .get(*cursor..len_end)
            .and_then(|b| b.try_into().ok())
            .ok_or_else(|| truncated(*cursor))?;
        let len = u32::from_le_bytes(len_bytes) as usize;

        let end = len_end.checked_add(len).ok_or_else(|| truncated(len_end))?;
        let chunk = bytes.get(len_end..end).ok_or_else(|| truncated(len_end))?;
        *cursor = end;
        Ok(chunk.to_vec())
    }

    /// Persist `data` as the new file contents.
    fn save_to_file(&self, data: &BTreeMap<Vec<u8>, Vec<u8>>) -> Result<(), KVStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let mut bytes = Vec::new();
        for (key, value) in data {
            bytes.extend_from_slice(&(key.len() as u32).to_le_bytes());
            bytes.extend_from_slice(key);
            bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
            bytes.extend_from_slice(value);
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(io_error)?;
        file.write_all(&bytes).map_err(io_error)?;
        file.sync_all().map_err(io_error)?;

        std::fs::rename(&temp_path, &self.path).map_err(io_error)?;

        Ok(())
    }
}

fn io_error(e: std::io::Error) -> KVStoreError {
    KVStoreError::IOError {
        message: e.to_string(),
    }
}

impl KeyValueStore for FileBackedKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    /// Visible to `get` only once the file holds it.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KVStoreError> {
        let mut next = self.data.clone();
        next.insert(key.to_vec(), value.to_vec());
        self.save_to_file(&next)?;
        self.data = next;
        Ok(())
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
        let results = self
            .data
            .range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");

        {
            let mut store = FileBackedKVStore::open(&path).unwrap();
            store.put(b"safrochain/p_safrochain", &[]).unwrap();
            store.put(b"other/key", b"value").unwrap();
        }

        let store = FileBackedKVStore::open(&path).unwrap();
        assert_eq!(store.get(b"safrochain/p_safrochain").unwrap(), Some(vec![]));
        assert_eq!(store.get(b"other/key").unwrap(), Some(b"value".to_vec()));
        assert_eq!(store.get(b"missing").unwrap(), None);
    }

    #[test]
    fn test_identical_contents_identical_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.db");
        let b = dir.path().join("b.db");

        let mut store_a = FileBackedKVStore::open(&a).unwrap();
        store_a.put(b"x", b"1").unwrap();
        store_a.put(b"y", b"2").unwrap();

        let mut store_b = FileBackedKVStore::open(&b).unwrap();
        store_b.put(b"y", b"2").unwrap();
        store_b.put(b"x", b"1").unwrap();

        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
    }

    #[test]
    fn test_failed_write_is_not_visible() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("store.db");
        let mut store = FileBackedKVStore::open(&path).unwrap();

        // A regular file where the data directory should be
        std::fs::write(dir.path().join("data"), b"").unwrap();

        let result = store.put(b"safrochain/p_safrochain", &[]);
        assert!(matches!(result, Err(KVStoreError::IOError { .. })));
        assert_eq!(store.get(b"safrochain/p_safrochain").unwrap(), None);
        assert!(store.prefix_scan(b"safrochain/").unwrap().is_empty());
    }

    #[test]
    fn test_truncated_file_is_corruption() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");
        // Key length 10, but only 3 key bytes follow
        let mut bytes = 10u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(b"abc");
        std::fs::write(&path, bytes).unwrap();

        let result = FileBackedKVStore::open(&path);
        assert!(matches!(result, Err(KVStoreError::CorruptionError { .. })));
    }
}
