//! # Genesis Controller
//!
//! One-shot whole-module state initialization and export.
//!
//! ## Failure Semantics
//!
//! Every error out of `init_genesis` must abort chain start: there is no
//! partial-initialization recovery. Validation runs over the complete
//! genesis state before the first write, so a rejected document leaves the
//! store untouched.

use crate::context::Context;
use crate::domain::{GenesisState, ModuleError};
use crate::keeper::Keeper;

/// Initialize the module's state from its genesis section.
///
/// Deterministic: the same `genesis` always produces byte-identical store
/// contents.
pub fn init_genesis(
    ctx: &mut Context<'_>,
    keeper: &Keeper,
    genesis: &GenesisState,
) -> Result<(), ModuleError> {
    genesis.validate()?;

    keeper.set_params(ctx, &genesis.params)?;

    tracing::info!(
        "[safrochain] Genesis state initialized at height {} (chain {:?})",
        ctx.block_height(),
        ctx.chain_id()
    );
    Ok(())
}

/// Export the module's entire state.
///
/// `export_genesis` after `init_genesis(g)` yields a state equal to `g`
/// once both are normalized.
pub fn export_genesis(ctx: &Context<'_>, keeper: &Keeper) -> Result<GenesisState, ModuleError> {
    let params = keeper.get_params(ctx)?;
    let genesis = GenesisState { params };

    tracing::info!(
        "[safrochain] Genesis state exported at height {}",
        ctx.block_height()
    );
    Ok(genesis)
}
