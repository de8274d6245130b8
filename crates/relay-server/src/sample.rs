//! Sample providers for the example deployment
//!
//! The `foo` provider keeps its variable behind an explicit `Arc<Mutex<_>>`
//! handed in by the caller; the substrate does not synchronize provider
//! state, so concurrent `setFoo` calls may interleave on the lock in any
//! order.

use anyhow::anyhow;
use relay_core::{Provider, ProviderTable};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Build the example provider table: a stateful `foo` provider plus a
/// stateless `echo` provider.
pub fn sample_table(foo_state: Arc<Mutex<String>>) -> ProviderTable {
    ProviderTable::new()
        .provider("foo", foo_provider(foo_state))
        .provider(
            "echo",
            Provider::new().procedure("echo", |args| async move {
                Ok(args.into_iter().next().unwrap_or(Value::Null))
            }),
        )
}

fn foo_provider(state: Arc<Mutex<String>>) -> Provider {
    let get_state = state.clone();
    Provider::new()
        .procedure("getFoo", move |_args| {
            let state = get_state.clone();
            async move { Ok(Value::String(state.lock().await.clone())) }
        })
        .procedure("setFoo", move |args| {
            let state = state.clone();
            async move {
                let value = args
                    .into_iter()
                    .next()
                    .ok_or_else(|| anyhow!("setFoo requires a value argument"))?;
                let text = value
                    .as_str()
                    .ok_or_else(|| anyhow!("setFoo value must be a string"))?
                    .to_owned();
                *state.lock().await = text.clone();
                Ok(Value::String(text))
            }
        })
        .field("description", "stateful sample provider")
}
