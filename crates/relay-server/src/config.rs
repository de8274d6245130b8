//! Server configuration from environment variables

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 7450;

/// Listen address for the example server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `RELAY_HOST` / `RELAY_PORT`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("RELAY_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("RELAY_PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("RELAY_PORT must be a port number, got {value:?}"))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "127.0.0.1:7450");
    }

    #[test]
    fn test_from_env_defaults_when_unset() {
        // Env vars are process-global; only assert the fallback shape when
        // the variables are not set by the harness.
        if std::env::var("RELAY_HOST").is_err() && std::env::var("RELAY_PORT").is_err() {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config, ServerConfig::default());
        }
    }
}
