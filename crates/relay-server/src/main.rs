// Relay example server
//
// Builds the sample provider table, binds the HTTP transport router, and
// serves until ctrl-c. Configuration comes from RELAY_HOST / RELAY_PORT.

mod config;
mod sample;

use config::ServerConfig;
use relay_core::Router;
use std::process;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Exit codes for different failure scenarios
mod exit_codes {
    pub const CONFIG_ERROR: i32 = 1;
    pub const SERVE_ERROR: i32 = 2;
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Starting relay example server v{}", env!("CARGO_PKG_VERSION"));

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(exit_codes::CONFIG_ERROR);
        }
    };

    let foo_state = Arc::new(Mutex::new("Foo".to_string()));
    let router = Arc::new(Router::new(sample::sample_table(foo_state)));

    if let Err(e) = relay_http::serve(&config.addr(), router).await {
        error!("Server failed: {:#}", e);
        process::exit(exit_codes::SERVE_ERROR);
    }

    info!("Server stopped");
}
