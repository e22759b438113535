//! # Test Utilities
//!
//! Isolated, store-backed module instances for tests and tooling.

use crate::adapters::InMemoryKVStore;
use crate::config::ModuleConfig;
use crate::context::Context;
use crate::domain::{GenesisState, ModuleError};
use crate::keeper::Keeper;
use crate::module::{export_genesis, init_genesis};

/// A keeper with default configuration and a fresh, empty store.
///
/// Build a `Context` over the returned store to drive the keeper.
pub fn keeper_for_test() -> (Keeper, InMemoryKVStore) {
    let keeper = match Keeper::new(ModuleConfig::default()) {
        Ok(keeper) => keeper,
        Err(e) => unreachable!("default module config is valid: {}", e),
    };
    (keeper, InMemoryKVStore::new())
}

/// Initialize a fresh store from `genesis` and export it straight back.
pub fn genesis_roundtrip(genesis: &GenesisState) -> Result<GenesisState, ModuleError> {
    let (keeper, mut store) = keeper_for_test();
    let mut ctx = Context::new(&mut store);
    init_genesis(&mut ctx, &keeper, genesis)?;
    export_genesis(&ctx, &keeper)
}
