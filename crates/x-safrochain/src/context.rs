//! # Execution Context
//!
//! Carries the current store view through every module operation.
//!
//! A state transition runs against exactly one `Context`. Writes take
//! `&mut Context`, reads take `&Context`, so two operations can never touch
//! the same store view at once.

use crate::ports::KeyValueStore;

/// Store view plus the block metadata of the running transition.
pub struct Context<'a> {
    store: &'a mut dyn KeyValueStore,
    block_height: u64,
    chain_id: String,
}

impl<'a> Context<'a> {
    /// Context at genesis height for an unnamed chain.
    pub fn new(store: &'a mut dyn KeyValueStore) -> Self {
        Self {
            store,
            block_height: 0,
            chain_id: String::new(),
        }
    }

    /// Builder method to set the block height.
    pub fn with_block_height(mut self, height: u64) -> Self {
        self.block_height = height;
        self
    }

    /// Builder method to set the chain id.
    pub fn with_chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain_id = chain_id.into();
        self
    }

    pub fn block_height(&self) -> u64 {
        self.block_height
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Shared store, read-only.
    pub fn store(&self) -> &dyn KeyValueStore {
        &*self.store
    }

    /// Shared store, writable.
    pub fn store_mut(&mut self) -> &mut dyn KeyValueStore {
        &mut *self.store
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("block_height", &self.block_height)
            .field("chain_id", &self.chain_id)
            .finish_non_exhaustive()
    }
}
