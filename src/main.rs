//! MantaCount service binary
//!
//! Wires the counter store into the HTTP server: one `CounterStore` for the
//! process lifetime, injected into the routing layer. All state is in
//! memory and discarded on exit.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use mantacount_api::{ApiConfig, ApiServer};
use mantacount_core::CounterStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ApiConfig::from_env();
    let store = Arc::new(CounterStore::new());

    ApiServer::new(config, store).start().await
}
