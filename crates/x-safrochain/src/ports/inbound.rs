//! # Inbound Ports (Driving Ports)
//!
//! The read-only query surface the host exposes over its RPC layer.

use crate::context::Context;
use crate::domain::ModuleError;
use crate::query::{QueryParamsRequest, QueryParamsResponse};

/// Query service of the Safrochain module.
///
/// Implementations never mutate state.
pub trait QueryServer {
    /// Current module params.
    ///
    /// ## Errors
    ///
    /// - `CorruptedState`: stored params do not decode
    /// - `Store`: the backend failed
    fn params(
        &self,
        ctx: &Context<'_>,
        request: &QueryParamsRequest,
    ) -> Result<QueryParamsResponse, ModuleError>;
}
