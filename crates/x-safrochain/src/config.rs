//! # Module Configuration
//!
//! Wiring-time settings of the keeper. These are fixed when the host builds
//! its module set and are not part of consensus state.

use thiserror::Error;

use crate::domain::STORE_KEY;

/// Address of the governance module, the default params authority.
pub const DEFAULT_AUTHORITY: &str = "gov";

/// Keeper configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleConfig {
    /// Namespace of the module in the shared store.
    pub store_key: String,
    /// Only signer allowed to call `update_params`.
    pub authority: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            store_key: STORE_KEY.to_string(),
            authority: DEFAULT_AUTHORITY.to_string(),
        }
    }
}

impl ModuleConfig {
    /// Builder method to set the params authority.
    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = authority.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_key.is_empty() {
            return Err(ConfigError::EmptyStoreKey);
        }
        if self.store_key.as_bytes().contains(&b'/') {
            return Err(ConfigError::InvalidStoreKey(self.store_key.clone()));
        }
        if self.authority.trim().is_empty() {
            return Err(ConfigError::EmptyAuthority);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("store key must not be empty")]
    EmptyStoreKey,

    #[error("store key {0:?} must not contain the namespace separator '/'")]
    InvalidStoreKey(String),

    #[error("params authority must not be empty")]
    EmptyAuthority,
}
