//! # Genesis State
//!
//! Serializable snapshot of the module's entire persistent state.
//!
//! ## Document Shape
//!
//! The module's section of the chain genesis file:
//!
//! ```json
//! { "params": {} }
//! ```
//!
//! An absent `params` field and `"params": null` both decode to
//! `Params::default()`. Unknown fields are rejected.
//!
//! ## Determinism
//!
//! `to_canonical_json` emits compact JSON with object keys sorted, so every
//! validator produces the same bytes (and the same `digest`) for the same
//! state.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use sha3::{Digest, Keccak256};

use super::errors::{ModuleError, ValidationError};
use super::params::Params;

/// The module's genesis state.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenesisState {
    /// Module params.
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub params: Params,
}

impl GenesisState {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    /// Validate every section of the genesis state.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.params.validate()
    }

    /// Canonical form for equality checks.
    ///
    /// Collapses every absent/empty representation into the one the module
    /// itself would export. Params carry no optional fields, so they are
    /// taken as is.
    pub fn normalized(&self) -> Self {
        Self {
            params: self.params.clone(),
        }
    }

    /// Decode the module's genesis section.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ModuleError> {
        serde_json::from_slice(bytes).map_err(|e| ModuleError::InvalidGenesis(e.to_string()))
    }

    /// Compact JSON with sorted object keys.
    pub fn to_canonical_json(&self) -> Result<Vec<u8>, ModuleError> {
        // serde_json::Map is ordered by key
        let value =
            serde_json::to_value(self).map_err(|e| ModuleError::InvalidGenesis(e.to_string()))?;
        serde_json::to_vec(&value).map_err(|e| ModuleError::InvalidGenesis(e.to_string()))
    }

    /// Human-readable JSON for operators.
    pub fn to_pretty_json(&self) -> Result<String, ModuleError> {
        serde_json::to_string_pretty(self).map_err(|e| ModuleError::InvalidGenesis(e.to_string()))
    }

    /// Keccak256 of the canonical JSON.
    pub fn digest(&self) -> Result<[u8; 32], ModuleError> {
        let bytes = self.to_canonical_json()?;
        let result = Keccak256::digest(&bytes);
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        Ok(hash)
    }

    /// Hex-encoded `digest`.
    pub fn digest_hex(&self) -> Result<String, ModuleError> {
        self.digest().map(hex::encode)
    }
}

/// Genesis state written when the operator supplies none.
pub fn default_genesis() -> GenesisState {
    GenesisState {
        params: Params::default(),
    }
}
