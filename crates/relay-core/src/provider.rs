//! Provider table: named groups of remote-callable procedures
//!
//! The table is built by the application, handed to the router at
//! construction, and never mutated afterwards. Procedures are type-erased
//! async callables over JSON values; the core imposes no signature beyond
//! "ordered argument list in, awaitable JSON value out".

use anyhow::Result;
use futures::future::BoxFuture;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;

/// Type-erased async procedure: ordered JSON args in, JSON value out.
pub type ProcedureFn =
    Box<dyn Fn(Vec<Value>) -> BoxFuture<'static, Result<Value>> + Send + Sync>;

/// A named entry on a provider.
///
/// Plain value fields are representable so that resolving a non-callable
/// entry stays a distinct, observable routing failure rather than being
/// unrepresentable in the registration API.
pub enum ProviderEntry {
    Procedure(ProcedureFn),
    Field(Value),
}

impl ProviderEntry {
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Procedure(_))
    }
}

/// A named group of procedures (and plain value fields).
#[derive(Default)]
pub struct Provider {
    entries: HashMap<String, ProviderEntry>,
}

impl Provider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an async procedure under `name`. Synchronous work registers
    /// through the same API by returning an immediately-ready future.
    pub fn procedure<F, Fut>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        self.entries.insert(
            name.into(),
            ProviderEntry::Procedure(Box::new(move |args| Box::pin(f(args)))),
        );
        self
    }

    /// Register a plain (non-callable) value field under `name`.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries
            .insert(name.into(), ProviderEntry::Field(value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&ProviderEntry> {
        self.entries.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered entry names, in no particular order.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Mapping from provider name to [`Provider`]. Keys are unique; a repeated
/// registration replaces the earlier provider.
#[derive(Default)]
pub struct ProviderTable {
    providers: HashMap<String, Provider>,
}

impl ProviderTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provider(mut self, name: impl Into<String>, provider: Provider) -> Self {
        self.providers.insert(name.into(), provider);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Provider> {
        self.providers.get(name)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Registered provider names, in no particular order.
    pub fn provider_names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_procedure_registration_and_lookup() {
        let provider = Provider::new().procedure("echo", |args| async move {
            Ok(args.into_iter().next().unwrap_or(Value::Null))
        });
        assert!(provider.get("echo").is_some());
        assert!(provider.get("echo").unwrap().is_callable());
        assert!(provider.get("missing").is_none());
    }

    #[test]
    fn test_field_is_not_callable() {
        let provider = Provider::new().field("description", "a sample provider");
        assert!(!provider.get("description").unwrap().is_callable());
    }

    #[test]
    fn test_table_unique_keys() {
        let table = ProviderTable::new()
            .provider("foo", Provider::new().field("v", 1))
            .provider("foo", Provider::new().field("v", 2));
        assert_eq!(table.len(), 1);
        match table.get("foo").unwrap().get("v").unwrap() {
            ProviderEntry::Field(v) => assert_eq!(*v, json!(2)),
            ProviderEntry::Procedure(_) => panic!("expected a field"),
        }
    }

    #[tokio::test]
    async fn test_registered_procedure_is_invocable() {
        let provider = Provider::new().procedure("double", |args| async move {
            let n = args
                .first()
                .and_then(Value::as_i64)
                .ok_or_else(|| anyhow::anyhow!("expected a number"))?;
            Ok(json!(n * 2))
        });
        let entry = provider.get("double").unwrap();
        match entry {
            ProviderEntry::Procedure(f) => {
                let out = f(vec![json!(21)]).await.unwrap();
                assert_eq!(out, json!(42));
            }
            ProviderEntry::Field(_) => panic!("expected a procedure"),
        }
    }
}
