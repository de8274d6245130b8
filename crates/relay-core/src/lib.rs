//! Transport-agnostic core of the relay RPC substrate
//!
//! Two halves, joined only by the wire envelope:
//! - server side: a [`Router`] resolves (provider, procedure, args) against
//!   an immutable [`ProviderTable`] and invokes the target exactly once;
//! - client side: an [`RpcClient`] projects per-provider handles whose
//!   calls funnel through a single [`RpcTransport::send_request`].
//!
//! Neither half performs I/O; transports plug in at the seams.

pub mod client;
pub mod error;
pub mod provider;
pub mod router;

pub use client::{BoundProcedure, ProviderHandle, RpcClient, RpcTransport};
pub use error::{InvokeError, InvokeResult, RoutingError};
pub use provider::{Provider, ProviderEntry, ProviderTable};
pub use router::Router;
