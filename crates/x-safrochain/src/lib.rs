//! # x-safrochain
//!
//! The Safrochain application module: params storage, the params query and
//! genesis import/export.
//!
//! ## Role in System
//!
//! - **Namespaced State**: owns every key under `safrochain/` in the shared store
//! - **Params Singleton**: one configuration record under `p_safrochain`
//! - **Genesis Participant**: deterministic `init_genesis` / `export_genesis`
//!
//! ## Flow
//!
//! ```text
//! init_genesis ──→ Keeper::set_params ──→ PrefixStore::set ──→ KeyValueStore
//! query params ──→ Keeper::get_params ──→ PrefixStore::get ──→ KeyValueStore
//! export_genesis ←─ Keeper::get_params
//! ```
//!
//! ## Determinism
//!
//! Store values are bincode with a single accepted encoding; genesis
//! documents are emitted as key-sorted compact JSON. Every validator computes
//! byte-identical state from the same genesis.

pub mod adapters;
pub mod codec;
pub mod config;
pub mod context;
pub mod domain;
pub mod keeper;
pub mod module;
pub mod ports;
pub mod query;
pub mod test_utils;

pub use adapters::*;
pub use codec::ParamsCodec;
pub use config::{ConfigError, ModuleConfig, DEFAULT_AUTHORITY};
pub use context::Context;
pub use domain::{
    default_genesis, DefaultParamsValidator, GenesisState, KVStoreError, ModuleError, Params,
    ParamsValidator, ValidationError, CONSENSUS_VERSION, MEM_STORE_KEY, MODULE_NAME, PARAMS_KEY,
    STORE_KEY,
};
pub use keeper::Keeper;
pub use module::{
    default_genesis_json, export_genesis, init_genesis, validate_genesis_json, AppModule,
};
pub use ports::*;
pub use query::{QueryParamsRequest, QueryParamsResponse};
