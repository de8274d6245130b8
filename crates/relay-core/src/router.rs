//! Router core: validate, resolve, invoke
//!
//! Transport-independent dispatch. Validation runs in a fixed order and
//! fails fast with a [`RoutingError`] before the provider table is touched
//! for shape violations, and before any procedure runs for resolution
//! failures. A resolved procedure is invoked exactly once; its own failure
//! propagates unclassified.

use crate::error::{InvokeError, InvokeResult, RoutingError};
use crate::provider::{ProviderEntry, ProviderTable};
use serde_json::Value;
use tracing::debug;

/// Server-side dispatch engine over an immutable [`ProviderTable`].
pub struct Router {
    table: ProviderTable,
}

impl Router {
    /// Take ownership of the provider table. The table is immutable from
    /// here on; there is no hot-reload.
    pub fn new(table: ProviderTable) -> Self {
        Self { table }
    }

    /// Dispatch a single call.
    ///
    /// `args` is `None` when the argument list was absent on the wire,
    /// which is a shape violation; an empty `Some(vec![])` is valid.
    pub async fn invoke(
        &self,
        provider: &str,
        procedure: &str,
        args: Option<Vec<Value>>,
    ) -> InvokeResult<Value> {
        let args = match args {
            Some(args) if !provider.is_empty() && !procedure.is_empty() => args,
            other => {
                return Err(
                    RoutingError::invalid_request(provider, procedure, other.is_some()).into(),
                );
            }
        };

        let target = self
            .table
            .get(provider)
            .ok_or_else(|| RoutingError::provider_not_found(provider))?;

        let entry = target
            .get(procedure)
            .ok_or_else(|| RoutingError::procedure_not_found(procedure, provider))?;

        let call = match entry {
            ProviderEntry::Procedure(f) => f,
            ProviderEntry::Field(_) => {
                return Err(RoutingError::not_callable(procedure, provider).into());
            }
        };

        debug!(provider, procedure, argc = args.len(), "dispatching call");
        call(args).await.map_err(InvokeError::Procedure)
    }
}
