//! # Node Configuration
//!
//! Defaults, then environment overrides, then command-line flags.
//!
//! ## Environment
//!
//! - `SAFRO_HOME`: node home directory
//! - `SAFRO_BACKEND`: `file` or `rocksdb`
//! - `SAFRO_LOG`: log filter (e.g. `info`, `x_safrochain=debug`)
//! - `SAFRO_CHAIN_ID`: chain id recorded in the execution context
//! - `SAFRO_AUTHORITY`: params authority

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use x_safrochain::ModuleConfig;

/// Persistent store implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Single-file store (`FileBackedKVStore`).
    #[default]
    File,
    /// RocksDB (requires the `rocksdb` feature).
    RocksDb,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "rocksdb" => Ok(StorageBackend::RocksDb),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// Complete node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Home directory; state lives under `<home>/data`.
    pub home: PathBuf,
    /// Storage backend.
    pub backend: StorageBackend,
    /// Log filter directive.
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones.
    pub json_logs: bool,
    /// Chain id recorded in the execution context.
    pub chain_id: String,
    /// Module wiring.
    pub module: ModuleConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            home: PathBuf::from("./.safrochain"),
            backend: StorageBackend::File,
            log_level: "info".to_string(),
            json_logs: false,
            chain_id: "safrochain-local".to_string(),
            module: ModuleConfig::default(),
        }
    }
}

impl NodeConfig {
    /// Directory holding the node's store.
    pub fn data_dir(&self) -> PathBuf {
        self.home.join("data")
    }

    /// Apply overrides from a variable lookup (`std::env::var` in production).
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(home) = lookup("SAFRO_HOME") {
            self.home = PathBuf::from(home);
        }
        if let Some(backend) = lookup("SAFRO_BACKEND") {
            self.backend = backend.parse()?;
        }
        if let Some(level) = lookup("SAFRO_LOG") {
            self.log_level = level;
        }
        if let Some(chain_id) = lookup("SAFRO_CHAIN_ID") {
            self.chain_id = chain_id;
        }
        if let Some(authority) = lookup("SAFRO_AUTHORITY") {
            self.module.authority = authority;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.module.validate()?;
        if self.chain_id.trim().is_empty() {
            return Err(ConfigError::EmptyChainId);
        }
        if self.backend == StorageBackend::RocksDb && !cfg!(feature = "rocksdb") {
            return Err(ConfigError::BackendUnavailable("rocksdb"));
        }
        Ok(())
    }
}

/// Load configuration from defaults and the process environment.
pub fn load_config() -> Result<NodeConfig, ConfigError> {
    NodeConfig::default().apply_env(|key| std::env::var(key).ok())
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown storage backend {0:?} (expected \"file\" or \"rocksdb\")")]
    UnknownBackend(String),

    #[error("storage backend {0} not compiled in; rebuild with --features {0}")]
    BackendUnavailable(&'static str),

    #[error("chain id must not be empty")]
    EmptyChainId,

    #[error(transparent)]
    Module(#[from] x_safrochain::ConfigError),
}
