//! Listener-backed serving for the HTTP binding

use crate::routes::rpc_routes;
use anyhow::{Context, Result};
use relay_core::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Bind `addr` and serve the RPC routes until a ctrl-c arrives.
pub async fn serve(addr: &str, router: Arc<Router>) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .with_context(|| format!("Invalid listen address: {addr}"))?;

    let app = rpc_routes(router).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("relay listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
