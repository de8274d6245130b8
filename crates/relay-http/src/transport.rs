//! HTTP client transport
//!
//! Serializes the call envelope, POSTs it to the remote `/rpc` endpoint,
//! and turns a non-success response back into an error carrying the remote
//! failure name and message. The projection layer above performs no
//! inspection of its own.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use relay_core::RpcTransport;
use relay_protocol::{CallRequest, FailureBody};
use serde_json::Value;

/// Transport over a single remote relay endpoint.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// `base_url` without a trailing slash, e.g. `http://127.0.0.1:7450`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn send_request(
        &self,
        provider: &str,
        procedure: &str,
        args: Vec<Value>,
    ) -> Result<Value> {
        let request = CallRequest::new(provider, procedure, args);

        let response = self
            .client
            .post(format!("{}/rpc", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        match response.json::<FailureBody>().await {
            Ok(failure) => Err(anyhow!("{}: {}", failure.name, failure.error)),
            Err(_) => Err(anyhow!("Unknown internal server error ({status})")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_targets_rpc_endpoint() {
        let transport = HttpTransport::new("http://127.0.0.1:7450");
        assert_eq!(transport.base_url, "http://127.0.0.1:7450");
    }
}
