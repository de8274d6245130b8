//! HTTP binding for the relay RPC substrate
//!
//! Server side: [`rpc_routes`] mounts `POST /rpc` over a core
//! [`relay_core::Router`] and maps the failure taxonomy onto status codes
//! (routing mistakes are the client's fault, procedure failures the
//! server's). Client side: [`HttpTransport`] implements the core transport
//! trait over reqwest.

pub mod routes;
pub mod server;
pub mod transport;

pub use routes::{health_routes, rpc_routes};
pub use server::serve;
pub use transport::HttpTransport;
