//! Failure taxonomy for call dispatch
//!
//! Two kinds: a [`RoutingError`] means the request could not even be
//! dispatched (client fault); anything raised by the invoked procedure
//! itself stays opaque behind [`InvokeError::Procedure`] (server fault).
//! Transports select status/severity by the variant, never by message.

use thiserror::Error;

/// The request could not be dispatched: malformed shape, unknown provider,
/// unknown procedure, or a non-callable target.
///
/// Always detected synchronously before the target runs; never retried.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Request shape violation: empty names or an absent argument list.
    #[error("Invalid request: provider={provider:?}, procedure={procedure:?}, args={args}")]
    InvalidRequest {
        provider: String,
        procedure: String,
        args: String,
    },

    /// No provider registered under this name.
    #[error("Provider with name {0} not found")]
    ProviderNotFound(String),

    /// The provider exists but has no entry under this name.
    #[error("Procedure {procedure} not found on provider {provider}")]
    ProcedureNotFound {
        procedure: String,
        provider: String,
    },

    /// The entry exists but holds a plain value, not a procedure.
    #[error("Property {property} is not a function on provider {provider} so it cannot be called")]
    NotCallable { property: String, provider: String },
}

impl RoutingError {
    pub fn invalid_request(provider: &str, procedure: &str, args_present: bool) -> Self {
        Self::InvalidRequest {
            provider: provider.to_owned(),
            procedure: procedure.to_owned(),
            args: if args_present { "present" } else { "absent" }.to_owned(),
        }
    }

    pub fn provider_not_found(provider: &str) -> Self {
        Self::ProviderNotFound(provider.to_owned())
    }

    pub fn procedure_not_found(procedure: &str, provider: &str) -> Self {
        Self::ProcedureNotFound {
            procedure: procedure.to_owned(),
            provider: provider.to_owned(),
        }
    }

    pub fn not_callable(property: &str, provider: &str) -> Self {
        Self::NotCallable {
            property: property.to_owned(),
            provider: provider.to_owned(),
        }
    }
}

/// Outcome classification for a single dispatch.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The request never reached a procedure.
    #[error(transparent)]
    Routing(#[from] RoutingError),

    /// The procedure ran and failed. Propagated unclassified; the core does
    /// not inspect application errors.
    #[error(transparent)]
    Procedure(#[from] anyhow::Error),
}

impl InvokeError {
    /// True when the failure is a client-fault routing mistake.
    pub fn is_routing(&self) -> bool {
        matches!(self, Self::Routing(_))
    }
}

/// Specialized Result type for dispatch outcomes.
pub type InvokeResult<T> = Result<T, InvokeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_not_found_display() {
        let err = RoutingError::provider_not_found("bar");
        assert_eq!(err.to_string(), "Provider with name bar not found");
    }

    #[test]
    fn test_procedure_not_found_display() {
        let err = RoutingError::procedure_not_found("getFoo", "bar");
        assert_eq!(
            err.to_string(),
            "Procedure getFoo not found on provider bar"
        );
    }

    #[test]
    fn test_not_callable_display() {
        let err = RoutingError::not_callable("description", "foo");
        assert!(err.to_string().contains("is not a function"));
        assert!(err.to_string().contains("description"));
        assert!(err.to_string().contains("foo"));
    }

    #[test]
    fn test_invalid_request_display_names_offending_fields() {
        let err = RoutingError::invalid_request("", "getFoo", false);
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid request:"));
        assert!(msg.contains("provider=\"\""));
        assert!(msg.contains("args=absent"));
    }

    #[test]
    fn test_invoke_error_classification() {
        let routing: InvokeError = RoutingError::provider_not_found("bar").into();
        assert!(routing.is_routing());

        let procedure: InvokeError = anyhow::anyhow!("disk full").into();
        assert!(!procedure.is_routing());
        assert_eq!(procedure.to_string(), "disk full");
    }
}
