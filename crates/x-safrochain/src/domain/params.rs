//! # Module Params
//!
//! The module's singleton configuration record.
//!
//! Exactly one `Params` value exists per module state. It is created by
//! genesis, replaced by `set_params`, and never deleted.

use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

/// Module-wide configuration.
///
/// The default build carries no fields; `Params::default()` is the value
/// written by the default genesis and returned for an uninitialized store.
/// Unknown JSON fields are rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {}

impl Params {
    /// The documented default params.
    pub fn new() -> Self {
        Self::default()
    }

    /// Field-level constraints. None are defined for the current field set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Validation hook run by the keeper before any params write.
///
/// Hosts that layer extra constraints on top of `Params::validate`
/// (chain-specific bounds, upgrade gates) plug them in here.
pub trait ParamsValidator: Send + Sync {
    fn validate(&self, params: &Params) -> Result<(), ValidationError>;
}

/// Delegates to `Params::validate`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultParamsValidator;

impl ParamsValidator for DefaultParamsValidator {
    fn validate(&self, params: &Params) -> Result<(), ValidationError> {
        params.validate()
    }
}

impl<F> ParamsValidator for F
where
    F: Fn(&Params) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate(&self, params: &Params) -> Result<(), ValidationError> {
        self(params)
    }
}
