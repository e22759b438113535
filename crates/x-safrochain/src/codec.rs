//! # Params Codec
//!
//! Byte encoding of values stored under module keys.
//!
//! bincode with fixed-width integers and trailing bytes rejected: every
//! value has exactly one accepted encoding, so `decode(encode(p)) == p` and
//! any other byte string fails to decode.

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{ModuleError, Params, PARAMS_KEY};

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .reject_trailing_bytes()
}

/// Encode a store value.
pub fn encode<T: Serialize>(key: &[u8], value: &T) -> Result<Vec<u8>, ModuleError> {
    options()
        .serialize(value)
        .map_err(|e| ModuleError::corrupted(key, e))
}

/// Decode a store value. Failure means the state under `key` is corrupted.
pub fn decode<T: DeserializeOwned>(key: &[u8], bytes: &[u8]) -> Result<T, ModuleError> {
    options()
        .deserialize(bytes)
        .map_err(|e| ModuleError::corrupted(key, e))
}

/// Codec for the params record.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParamsCodec;

impl ParamsCodec {
    pub fn encode(&self, params: &Params) -> Result<Vec<u8>, ModuleError> {
        encode(PARAMS_KEY, params)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Params, ModuleError> {
        decode(PARAMS_KEY, bytes)
    }
}
