//! # Params Keeper
//!
//! The module's only handle on its params record.
//!
//! Params are stored as one opaque value under `PARAMS_KEY`, so any partial
//! change is a full read-decode-modify-encode-write cycle. Updates only happen
//! at genesis or through governance, which keeps that acceptable.

use crate::adapters::PrefixStore;
use crate::codec::ParamsCodec;
use crate::config::{ConfigError, ModuleConfig};
use crate::context::Context;
use crate::domain::{DefaultParamsValidator, ModuleError, Params, ParamsValidator, PARAMS_KEY};

/// Reads and writes the module's params.
pub struct Keeper {
    store: PrefixStore,
    codec: ParamsCodec,
    authority: String,
    validator: Box<dyn ParamsValidator>,
}

impl Keeper {
    /// Build a keeper from validated configuration.
    pub fn new(config: ModuleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store: PrefixStore::new(&config.store_key),
            codec: ParamsCodec,
            authority: config.authority,
            validator: Box::new(DefaultParamsValidator),
        })
    }

    /// Replace the validation hook run before every params write.
    pub fn with_validator(mut self, validator: impl ParamsValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    /// Signer allowed to call `update_params`.
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// The module's namespaced view of the shared store.
    pub fn store(&self) -> &PrefixStore {
        &self.store
    }

    /// Current params.
    ///
    /// An absent record reads as `Params::default()`. Genesis always writes
    /// one, so absence in an initialized chain is a wiring defect, but the
    /// read path stays total.
    ///
    /// ## Errors
    ///
    /// - `CorruptedState`: the stored bytes do not decode
    /// - `Store`: the backend failed
    pub fn get_params(&self, ctx: &Context<'_>) -> Result<Params, ModuleError> {
        match self.store.get(ctx.store(), PARAMS_KEY)? {
            Some(bytes) => self.codec.decode(&bytes).map_err(|e| {
                tracing::error!("[safrochain] Stored params failed to decode: {}", e);
                e
            }),
            None => {
                tracing::debug!("[safrochain] No params stored, using defaults");
                Ok(Params::default())
            }
        }
    }

    /// True once params have been written (by genesis or a later update).
    pub fn has_params(&self, ctx: &Context<'_>) -> Result<bool, ModuleError> {
        Ok(self.store.get(ctx.store(), PARAMS_KEY)?.is_some())
    }

    /// Validate and store `params`.
    ///
    /// On `Validation` error nothing is written and the previous params stay
    /// in place. On success the store holds exactly `params`.
    pub fn set_params(&self, ctx: &mut Context<'_>, params: &Params) -> Result<(), ModuleError> {
        self.validator.validate(params)?;

        let bytes = self.codec.encode(params)?;
        self.store.set(ctx.store_mut(), PARAMS_KEY, &bytes)?;

        tracing::debug!(
            "[safrochain] Params written at height {} ({} bytes)",
            ctx.block_height(),
            bytes.len()
        );
        Ok(())
    }

    /// Governance-gated params replacement.
    ///
    /// ## Errors
    ///
    /// - `Unauthorized`: `authority` is not the configured module authority
    /// - `Validation`: `params` rejected by the validation hook
    pub fn update_params(
        &self,
        ctx: &mut Context<'_>,
        authority: &str,
        params: &Params,
    ) -> Result<(), ModuleError> {
        if authority != self.authority {
            tracing::warn!(
                "[safrochain] Rejected params update from {} (authority is {})",
                authority,
                self.authority
            );
            return Err(ModuleError::Unauthorized {
                expected: self.authority.clone(),
                actual: authority.to_string(),
            });
        }

        self.set_params(ctx, params)?;
        tracing::info!(
            "[safrochain] Params updated by {} at height {}",
            authority,
            ctx.block_height()
        );
        Ok(())
    }
}

impl std::fmt::Debug for Keeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keeper")
            .field("store", &self.store)
            .field("authority", &self.authority)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryKVStore;
    use crate::domain::ValidationError;
    use crate::ports::KeyValueStore;
    use crate::test_utils::keeper_for_test;

    #[test]
    fn test_get_params() {
        let (keeper, mut store) = keeper_for_test();
        let mut ctx = Context::new(&mut store);
        let params = Params::default();

        keeper.set_params(&mut ctx, &params).unwrap();
        assert_eq!(keeper.get_params(&ctx).unwrap(), params);
    }

    #[test]
    fn test_get_params_uninitialized_returns_default() {
        let (keeper, mut store) = keeper_for_test();
        let ctx = Context::new(&mut store);

        assert!(!keeper.has_params(&ctx).unwrap());
        assert_eq!(keeper.get_params(&ctx).unwrap(), Params::default());
    }

    #[test]
    fn test_set_params_writes_fixed_key() {
        let (keeper, mut store) = keeper_for_test();
        {
            let mut ctx = Context::new(&mut store);
            keeper.set_params(&mut ctx, &Params::default()).unwrap();
            assert!(keeper.has_params(&ctx).unwrap());
        }

        // Present but empty: the encoding of the default params
        assert_eq!(store.get(b"safrochain/p_safrochain").unwrap(), Some(vec![]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_corrupted_params_are_not_masked() {
        let (keeper, mut store) = keeper_for_test();
        store.put(b"safrochain/p_safrochain", b"garbage").unwrap();
        let ctx = Context::new(&mut store);

        let err = keeper.get_params(&ctx).unwrap_err();
        assert!(matches!(err, ModuleError::CorruptedState { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_rejected_params_leave_store_unchanged() {
        let keeper = Keeper::new(ModuleConfig::default())
            .unwrap()
            .with_validator(|_: &Params| -> Result<(), ValidationError> {
                Err(ValidationError::new("params", "frozen"))
            });
        let mut store = InMemoryKVStore::new();
        store.put(b"safrochain/p_safrochain", &[]).unwrap();
        let before = store.clone();

        {
            let mut ctx = Context::new(&mut store);
            let err = keeper.set_params(&mut ctx, &Params::default()).unwrap_err();
            assert!(matches!(err, ModuleError::Validation(_)));
        }

        assert_eq!(store, before);
    }

    #[test]
    fn test_update_params_requires_authority() {
        let (keeper, mut store) = keeper_for_test();
        let mut ctx = Context::new(&mut store).with_block_height(42);

        let err = keeper
            .update_params(&mut ctx, "cosmos1mallory", &Params::default())
            .unwrap_err();
        assert_eq!(
            err,
            ModuleError::Unauthorized {
                expected: "gov".to_string(),
                actual: "cosmos1mallory".to_string(),
            }
        );
        assert!(!keeper.has_params(&ctx).unwrap());

        keeper
            .update_params(&mut ctx, keeper.authority(), &Params::default())
            .unwrap();
        assert!(keeper.has_params(&ctx).unwrap());
    }

    #[test]
    fn test_custom_store_key() {
        let keeper = Keeper::new(ModuleConfig {
            store_key: "safrochain_v2".to_string(),
            ..Default::default()
        })
        .unwrap();
        let mut store = InMemoryKVStore::new();
        {
            let mut ctx = Context::new(&mut store);
            keeper.set_params(&mut ctx, &Params::default()).unwrap();
        }
        assert!(store.get(b"safrochain_v2/p_safrochain").unwrap().is_some());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Keeper::new(ModuleConfig::default().with_authority(""));
        assert!(matches!(result, Err(ConfigError::EmptyAuthority)));
    }
}
