//! # Store Wiring
//!
//! Opens the configured `KeyValueStore` backend under the node's data dir.

use anyhow::{Context as _, Result};
use x_safrochain::{FileBackedKVStore, KeyValueStore};

use crate::config::{NodeConfig, StorageBackend};

/// File name of the single-file store inside the data directory.
pub const STATE_FILE: &str = "state.db";

/// Open the configured backend.
pub fn open_store(config: &NodeConfig) -> Result<Box<dyn KeyValueStore>> {
    let data_dir = config.data_dir();

    match config.backend {
        StorageBackend::File => {
            let path = data_dir.join(STATE_FILE);
            let store = FileBackedKVStore::open(&path)
                .with_context(|| format!("opening file store at {}", path.display()))?;
            Ok(Box::new(store))
        }
        #[cfg(feature = "rocksdb")]
        StorageBackend::RocksDb => {
            let path = data_dir.join("rocksdb");
            let store = x_safrochain::RocksDbStore::open_default(&path)
                .with_context(|| format!("opening RocksDB at {}", path.display()))?;
            Ok(Box::new(store))
        }
        #[cfg(not(feature = "rocksdb"))]
        StorageBackend::RocksDb => {
            anyhow::bail!(
                "storage backend rocksdb not compiled in; rebuild with --features rocksdb"
            )
        }
    }
}
