//! # Node
//!
//! Owns the opened store and the wired module, and runs one operator
//! command against them. Each command is a single state transition over
//! one `Context`.

use anyhow::{bail, Context as _, Result};
use tracing::info;
use x_safrochain::{
    AppModule, Context, GenesisState, Keeper, KeyValueStore, Params, QueryParamsResponse,
};

use crate::config::NodeConfig;
use crate::lock::DataDirLock;
use crate::store::open_store;

/// An opened node home.
pub struct Node {
    config: NodeConfig,
    module: AppModule,
    store: Box<dyn KeyValueStore>,
    _lock: DataDirLock,
}

impl Node {
    /// Validate `config`, lock the data directory and open the store.
    pub fn open(config: NodeConfig) -> Result<Self> {
        config.validate().context("invalid configuration")?;

        let lock = DataDirLock::acquire(&config.data_dir())
            .with_context(|| format!("locking {}", config.data_dir().display()))?;
        let store = open_store(&config)?;
        let keeper = Keeper::new(config.module.clone()).context("invalid module configuration")?;

        info!(
            "[safrochaind] Opened home {} ({:?} backend, chain {})",
            config.home.display(),
            config.backend,
            config.chain_id
        );

        Ok(Self {
            config,
            module: AppModule::new(keeper),
            store,
            _lock: lock,
        })
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Apply a genesis section. Refuses an already initialized store unless `force`.
    pub fn init_genesis(&mut self, genesis_json: &[u8], force: bool) -> Result<GenesisState> {
        let mut ctx = Context::new(self.store.as_mut()).with_chain_id(self.config.chain_id.clone());

        if !force && self.module.keeper().has_params(&ctx)? {
            bail!("module state already initialized; pass --force to overwrite");
        }

        let genesis = self
            .module
            .init_genesis_json(&mut ctx, genesis_json)
            .context("genesis initialization failed")?;
        Ok(genesis)
    }

    /// Export the module state as canonical JSON.
    pub fn export_genesis(&mut self) -> Result<Vec<u8>> {
        let ctx = Context::new(self.store.as_mut()).with_chain_id(self.config.chain_id.clone());
        let bytes = self
            .module
            .export_genesis_json(&ctx)
            .context("genesis export failed")?;
        Ok(bytes)
    }

    pub fn query_params(&mut self) -> Result<QueryParamsResponse> {
        let ctx = Context::new(self.store.as_mut()).with_chain_id(self.config.chain_id.clone());
        let response = self.module.query_params(&ctx)?;
        Ok(response)
    }

    /// Governance-gated params replacement from a JSON `Params` object.
    pub fn update_params(&mut self, authority: &str, params_json: &str) -> Result<Params> {
        let params: Params =
            serde_json::from_str(params_json).context("params must be a JSON object")?;

        let mut ctx = Context::new(self.store.as_mut()).with_chain_id(self.config.chain_id.clone());
        self.module
            .keeper()
            .update_params(&mut ctx, authority, &params)?;
        Ok(params)
    }
}
