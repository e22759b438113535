//! # Store Key Namespace
//!
//! Identifiers under which the module's state lives in the shared store.
//!
//! These values are part of the persisted layout. Changing any of them
//! orphans state written by earlier versions.

/// Module name, used as the genesis document section and log prefix.
pub const MODULE_NAME: &str = "safrochain";

/// Primary store key. The module's entries are namespaced under it.
pub const STORE_KEY: &str = MODULE_NAME;

/// In-memory (transient) store key.
pub const MEM_STORE_KEY: &str = "mem_safrochain";

/// Key of the singleton params record inside the module namespace.
pub const PARAMS_KEY: &[u8] = b"p_safrochain";

/// Separator between a store key and the keys inside its namespace.
pub const NAMESPACE_SEPARATOR: u8 = b'/';

/// Version of the module's state layout, bumped on every state migration.
pub const CONSENSUS_VERSION: u64 = 1;

/// Build a key prefix from a string.
pub fn key_prefix(p: &str) -> Vec<u8> {
    p.as_bytes().to_vec()
}

/// Prefix under which every key of `store_key` is stored in the shared store.
pub fn namespace_prefix(store_key: &str) -> Vec<u8> {
    let mut prefix = key_prefix(store_key);
    prefix.push(NAMESPACE_SEPARATOR);
    prefix
}
