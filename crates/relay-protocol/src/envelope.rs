use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single remote call: provider, procedure, positional arguments.
///
/// `args` is `Option` so that an envelope with the field absent is
/// distinguishable from one carrying an empty argument list. The router
/// rejects absent args; transports always serialize `Some`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRequest {
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub procedure: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<Value>>,
}

impl CallRequest {
    pub fn new(
        provider: impl Into<String>,
        procedure: impl Into<String>,
        args: Vec<Value>,
    ) -> Self {
        Self {
            provider: provider.into(),
            procedure: procedure.into(),
            args: Some(args),
        }
    }
}

/// Failure response body: a short error class name plus a human-readable
/// message, optionally carrying the underlying cause chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureBody {
    pub name: String,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Value>,
}

impl FailureBody {
    /// Failure body for a request that could not be dispatched.
    pub fn routing(message: impl Into<String>) -> Self {
        Self {
            name: "RoutingError".to_string(),
            error: message.into(),
            stack: None,
            cause: None,
        }
    }

    /// Failure body for an error raised by the invoked procedure or the
    /// transport itself.
    pub fn internal(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            error: message.into(),
            stack: None,
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: Value) -> Self {
        self.cause = Some(cause);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_request_serialization() {
        let req = CallRequest::new("foo", "setFoo", vec![json!("bar")]);
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"provider\":\"foo\""));
        assert!(json.contains("\"procedure\":\"setFoo\""));
        assert!(json.contains("\"args\":[\"bar\"]"));
    }

    #[test]
    fn test_call_request_absent_args_deserializes_to_none() {
        let req: CallRequest =
            serde_json::from_str(r#"{"provider":"foo","procedure":"getFoo"}"#).unwrap();
        assert_eq!(req.args, None);
    }

    #[test]
    fn test_call_request_empty_args_distinct_from_absent() {
        let req: CallRequest =
            serde_json::from_str(r#"{"provider":"foo","procedure":"getFoo","args":[]}"#).unwrap();
        assert_eq!(req.args, Some(vec![]));
    }

    #[test]
    fn test_call_request_missing_fields_default_to_empty() {
        let req: CallRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.provider, "");
        assert_eq!(req.procedure, "");
        assert_eq!(req.args, None);
    }

    #[test]
    fn test_failure_body_routing() {
        let body = FailureBody::routing("Provider with name bar not found");
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"name\":\"RoutingError\""));
        assert!(json.contains("Provider with name bar not found"));
        assert!(!json.contains("stack"));
        assert!(!json.contains("cause"));
    }

    #[test]
    fn test_failure_body_with_cause() {
        let body =
            FailureBody::internal("Error", "write failed").with_cause(json!(["disk full"]));
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"cause\":[\"disk full\"]"));
    }
}
