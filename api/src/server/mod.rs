//! API Server Module
//!
//! This module contains the server setup functionality for the API system.

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use mantacount_core::CounterStore;

use crate::handlers::{
    add_manta, egg_found, get_manta, get_stats, health_check, reset_counter, set_kills, ApiState,
};
use crate::models::ApiConfig;

/// Build the application router. Exposed separately from [`ApiServer`] so
/// tests can drive the routes without binding a socket.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Chat-bot endpoints, plain text
        .route("/api/manta", get(get_manta))
        .route("/api/mantaadd", get(add_manta))
        .route("/api/eggfound", get(egg_found))
        .route("/api/setkills", get(set_kills))
        // Dashboard endpoints, JSON
        .route("/api/stats", get(get_stats))
        .route("/api/reset", post(reset_counter))
        // Health check
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        // The dashboard is a browser client served from elsewhere
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Main API server
pub struct ApiServer {
    /// Server configuration
    config: ApiConfig,
    /// Shared state
    state: Arc<ApiState>,
}

impl ApiServer {
    /// Create a new API server around the process-wide counter store
    pub fn new(config: ApiConfig, store: Arc<CounterStore>) -> Self {
        let state = Arc::new(ApiState { store });
        Self { config, state }
    }

    /// Start the API server
    pub async fn start(&self) -> Result<()> {
        let app = router(self.state.clone());

        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("MantaCount API server listening on {}", addr);

        axum::serve(listener, app)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to start API server: {}", e))?;

        Ok(())
    }
}
