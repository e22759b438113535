//! # Query Service
//!
//! Read-only handlers behind the host's query surface.

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::domain::{ModuleError, Params};
use crate::keeper::Keeper;
use crate::ports::QueryServer;

/// Request for the current module params. Carries no fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParamsRequest {}

/// Response holding the current module params.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParamsResponse {
    pub params: Params,
}

impl QueryServer for Keeper {
    fn params(
        &self,
        ctx: &Context<'_>,
        _request: &QueryParamsRequest,
    ) -> Result<QueryParamsResponse, ModuleError> {
        let params = self.get_params(ctx)?;
        Ok(QueryParamsResponse { params })
    }
}
