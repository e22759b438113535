//! # App Module
//!
//! The surface the host application drives: module identity, genesis
//! document handling and the query service.

pub mod genesis;

pub use genesis::{export_genesis, init_genesis};

use crate::context::Context;
use crate::domain::{default_genesis, GenesisState, ModuleError, CONSENSUS_VERSION, MODULE_NAME};
use crate::keeper::Keeper;
use crate::ports::QueryServer;
use crate::query::{QueryParamsRequest, QueryParamsResponse};

/// Canonical JSON of the default genesis section.
pub fn default_genesis_json() -> Result<Vec<u8>, ModuleError> {
    default_genesis().to_canonical_json()
}

/// Parse and validate a genesis section without touching any store.
pub fn validate_genesis_json(bytes: &[u8]) -> Result<GenesisState, ModuleError> {
    let genesis = GenesisState::from_json(bytes)?;
    genesis.validate()?;
    Ok(genesis)
}

/// The Safrochain module as wired into a host application.
#[derive(Debug)]
pub struct AppModule {
    keeper: Keeper,
}

impl AppModule {
    pub fn new(keeper: Keeper) -> Self {
        Self { keeper }
    }

    pub fn name(&self) -> &'static str {
        MODULE_NAME
    }

    pub fn consensus_version(&self) -> u64 {
        CONSENSUS_VERSION
    }

    pub fn keeper(&self) -> &Keeper {
        &self.keeper
    }

    /// Decode, validate and apply the module's genesis section.
    pub fn init_genesis_json(
        &self,
        ctx: &mut Context<'_>,
        bytes: &[u8],
    ) -> Result<GenesisState, ModuleError> {
        let genesis = validate_genesis_json(bytes)?;
        init_genesis(ctx, &self.keeper, &genesis)?;
        Ok(genesis)
    }

    /// Export the module's state as canonical JSON.
    pub fn export_genesis_json(&self, ctx: &Context<'_>) -> Result<Vec<u8>, ModuleError> {
        export_genesis(ctx, &self.keeper)?.to_canonical_json()
    }

    /// Route a params query to the keeper.
    pub fn query_params(&self, ctx: &Context<'_>) -> Result<QueryParamsResponse, ModuleError> {
        self.keeper.params(ctx, &QueryParamsRequest {})
    }
}
