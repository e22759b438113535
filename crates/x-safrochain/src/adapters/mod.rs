//! # Adapters
//!
//! `KeyValueStore` implementations and the namespaced accessor the keeper
//! uses on top of them.

mod file;
mod memory;
mod prefix;
#[cfg(feature = "rocksdb")]
mod rocksdb_adapter;

pub use file::FileBackedKVStore;
pub use memory::InMemoryKVStore;
pub use prefix::PrefixStore;
#[cfg(feature = "rocksdb")]
pub use rocksdb_adapter::{RocksDbConfig, RocksDbStore};
