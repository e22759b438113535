//! # Domain Errors
//!
//! Error types for the Safrochain module.
//!
//! ## Taxonomy
//!
//! - `ValidationError`: input params rejected, nothing written. Recoverable.
//! - `ModuleError::CorruptedState`: stored bytes do not decode. Fatal.
//! - `ModuleError::Store`: the backend failed. Fatal to the enclosing transition.
//!
//! No operation in this crate retries; retry policy belongs to the caller.

use thiserror::Error;

/// Params (or genesis state) failed module-defined constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// Name of the offending field (or `params` for whole-record checks).
    pub field: String,
    /// Human-readable reason.
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Key-value store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },

    /// The backend detected damage in its own files.
    #[error("KV store corruption: {message}")]
    CorruptionError { message: String },
}

/// Errors surfaced by the keeper, the query service and the genesis controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleError {
    /// Params rejected by the validation hook. The store is unchanged.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Bytes stored under a module key do not decode.
    #[error("corrupted state under key {key}: {reason}")]
    CorruptedState { key: String, reason: String },

    /// The underlying store failed.
    #[error("store error: {0}")]
    Store(#[from] KVStoreError),

    /// A genesis document could not be parsed.
    #[error("invalid genesis document: {0}")]
    InvalidGenesis(String),

    /// Signer of a governance-gated operation is not the module authority.
    #[error("unauthorized: expected authority {expected}, got {actual}")]
    Unauthorized { expected: String, actual: String },
}

impl ModuleError {
    /// Build a `CorruptedState` error for a raw store key.
    pub fn corrupted(key: &[u8], reason: impl ToString) -> Self {
        ModuleError::CorruptedState {
            key: String::from_utf8_lossy(key).into_owned(),
            reason: reason.to_string(),
        }
    }

    /// True for errors after which the state machine must halt.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ModuleError::CorruptedState { .. } | ModuleError::Store(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModuleError::corrupted(b"p_safrochain", "unexpected end of input");
        let msg = err.to_string();
        assert!(msg.contains("p_safrochain"));
        assert!(msg.contains("unexpected end of input"));
    }

    #[test]
    fn test_validation_error_is_recoverable() {
        let err: ModuleError = ValidationError::new("params", "rejected").into();
        assert!(!err.is_fatal());
        assert!(matches!(err, ModuleError::Validation(_)));
    }

    #[test]
    fn test_kv_error_conversion() {
        let kv_err = KVStoreError::IOError {
            message: "disk failure".to_string(),
        };
        let err: ModuleError = kv_err.into();

        match &err {
            ModuleError::Store(KVStoreError::IOError { message }) => {
                assert!(message.contains("disk failure"));
            }
            _ => panic!("Expected Store error"),
        }
        assert!(err.is_fatal());
    }
}
