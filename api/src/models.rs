//! API configuration.

use tracing::warn;

/// Server configuration for the API surface.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ApiConfig {
    /// Build a config from `HOST`/`PORT` environment variables, falling
    /// back to the defaults when unset. A malformed `PORT` is ignored with
    /// a warning rather than failing startup.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("Ignoring non-numeric PORT value: {}", port),
            }
        }
        config
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
