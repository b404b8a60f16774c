//! MantaCount API Module
//!
//! The API module provides the HTTP endpoints for the kill counter:
//! plain-text routes consumed by the chat bot (the response body is pasted
//! into chat verbatim) and JSON routes consumed by the dashboard.

pub mod error;
pub mod handlers;
pub mod models;
pub mod server;

pub use error::ApiError;
pub use handlers::ApiState;
pub use models::ApiConfig;
pub use server::{router, ApiServer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_config_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn api_config_bind_addr() {
        let config = ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }
}
