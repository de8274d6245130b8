//! RPC and health endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use relay_core::InvokeError;
use relay_protocol::{CallRequest, FailureBody};
use serde_json::{json, Value};
use std::sync::Arc;

/// Mount the RPC endpoint over a core router, plus the health routes.
pub fn rpc_routes(router: Arc<relay_core::Router>) -> Router {
    Router::new()
        .route("/rpc", post(rpc_handler))
        .with_state(router)
        .merge(health_routes())
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "relay"
    }))
}

/// Deserialize the envelope, dispatch, and frame the outcome.
///
/// A missing `args` field deserializes to `None` and is rejected by the
/// core's own validation, so the shape diagnostics stay identical across
/// transports.
async fn rpc_handler(
    State(router): State<Arc<relay_core::Router>>,
    Json(req): Json<CallRequest>,
) -> Response {
    match router.invoke(&req.provider, &req.procedure, req.args).await {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(err) => failure_response(err),
    }
}

/// Status selection by failure class: routing mistakes are the client's
/// fault, everything a procedure raises is the server's.
fn failure_response(err: InvokeError) -> Response {
    match err {
        InvokeError::Routing(routing) => {
            tracing::debug!("routing failure: {}", routing);
            (
                StatusCode::BAD_REQUEST,
                Json(FailureBody::routing(routing.to_string())),
            )
                .into_response()
        }
        InvokeError::Procedure(inner) => {
            tracing::error!("procedure failure: {:#}", inner);
            let causes: Vec<Value> = inner
                .chain()
                .skip(1)
                .map(|cause| Value::String(cause.to_string()))
                .collect();
            let mut body = FailureBody::internal("Error", inner.to_string());
            if !causes.is_empty() {
                body = body.with_cause(Value::Array(causes));
            }
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_failure_response_status_by_class() {
        let routing = failure_response(relay_core::RoutingError::provider_not_found("bar").into());
        assert_eq!(routing.status(), StatusCode::BAD_REQUEST);

        let procedure = failure_response(InvokeError::Procedure(anyhow!("boom")));
        assert_eq!(procedure.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_procedure_failure_carries_cause_chain() {
        let root = anyhow!("disk full");
        let err = root.context("write failed");
        let response = failure_response(InvokeError::Procedure(err));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
