//! Client core: per-provider call projection
//!
//! [`RpcClient::get`] synthesizes a [`ProviderHandle`] for any provider
//! name; the handle accepts arbitrary procedure names and funnels every
//! invocation through the one [`RpcTransport::send_request`] method a
//! concrete transport supplies. The projection shapes requests and nothing
//! else: outcomes pass through uninspected, and no state is retained
//! between calls beyond the bound names.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// The sole extension point a concrete transport implements.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Carry one call to the remote side and return its outcome.
    async fn send_request(
        &self,
        provider: &str,
        procedure: &str,
        args: Vec<Value>,
    ) -> Result<Value>;
}

/// Client-side entry point; hands out per-provider projections.
pub struct RpcClient<T: RpcTransport> {
    transport: Arc<T>,
}

impl<T: RpcTransport> RpcClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Project a provider by name. Projections are built on demand and are
    /// independent: two handles for the same name behave identically.
    pub fn get(&self, provider: &str) -> ProviderHandle<T> {
        ProviderHandle {
            provider: provider.to_owned(),
            transport: self.transport.clone(),
        }
    }
}

impl<T: RpcTransport> Clone for RpcClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
        }
    }
}

/// A call projection for one provider. Structurally unconstrained: any
/// procedure name yields a callable, whether or not the remote side knows
/// it (unknown names fail at dispatch, not here).
pub struct ProviderHandle<T: RpcTransport> {
    provider: String,
    transport: Arc<T>,
}

impl<T: RpcTransport> ProviderHandle<T> {
    pub fn provider_name(&self) -> &str {
        &self.provider
    }

    /// Bind a procedure name, yielding a reusable callable.
    pub fn procedure(&self, name: &str) -> BoundProcedure<T> {
        BoundProcedure {
            provider: self.provider.clone(),
            procedure: name.to_owned(),
            transport: self.transport.clone(),
        }
    }

    /// One-shot form: bind and invoke in a single call.
    pub async fn call(&self, procedure: &str, args: Vec<Value>) -> Result<Value> {
        self.transport
            .send_request(&self.provider, procedure, args)
            .await
    }
}

impl<T: RpcTransport> Clone for ProviderHandle<T> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            transport: self.transport.clone(),
        }
    }
}

/// A callable bound to (provider, procedure). Holds nothing else; repeated
/// invocations are independent.
pub struct BoundProcedure<T: RpcTransport> {
    provider: String,
    procedure: String,
    transport: Arc<T>,
}

impl<T: RpcTransport> BoundProcedure<T> {
    pub async fn invoke(&self, args: Vec<Value>) -> Result<Value> {
        self.transport
            .send_request(&self.provider, &self.procedure, args)
            .await
    }
}

impl<T: RpcTransport> Clone for BoundProcedure<T> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            procedure: self.procedure.clone(),
            transport: self.transport.clone(),
        }
    }
}
