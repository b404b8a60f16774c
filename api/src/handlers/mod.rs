//! API Handlers Module
//!
//! Request handlers for the kill-counter endpoints. The chat endpoints
//! return plain text (Nightbot substitutes the raw body into a chat
//! message); the dashboard endpoints return JSON.

use axum::{
    debug_handler,
    extract::{Query, State},
    response::Json,
};
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use mantacount_core::{Counter, CounterStore, Stats, RESET_BY_EGG_FOUND, RESET_BY_MANUAL};

use crate::error::ApiError;

/// Represents the state of the API server
pub struct ApiState {
    /// The one counter store for the process
    pub store: Arc<CounterStore>,
}

fn kill_word(value: u64) -> &'static str {
    if value == 1 {
        "kill"
    } else {
        "kills"
    }
}

/// Current count for the !manta chat command. Counts itself as a request.
#[debug_handler]
pub async fn get_manta(State(state): State<Arc<ApiState>>) -> String {
    tracing::debug!("Fetching counter");

    let counter = state.store.read();
    format!(
        "It has been {} {} since the last egg",
        counter.value,
        kill_word(counter.value)
    )
}

/// Increment the count for the !mantaadd chat command.
#[debug_handler]
pub async fn add_manta(State(state): State<Arc<ApiState>>) -> String {
    tracing::debug!("Incrementing counter");

    let counter = state.store.increment();
    let time_word = if counter.value == 1 { "time" } else { "times" };
    format!("Manta has now been slain {} {}", counter.value, time_word)
}

/// Reset the count for the !eggfound chat command, reporting the value the
/// counter held before the reset.
#[debug_handler]
pub async fn egg_found(State(state): State<Arc<ApiState>>) -> String {
    tracing::debug!("Egg found, resetting counter");

    let previous = state.store.read().value;
    state.store.reset(RESET_BY_EGG_FOUND);
    format!("Egg found! Manta count reset. Previous count: {}", previous)
}

// Strict validation: pure ASCII digits, no sign, no whitespace.
fn count_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+$").expect("valid literal pattern"))
}

/// Set the count to an absolute value for the !setkills chat command.
#[debug_handler]
pub async fn set_kills(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<String, ApiError> {
    let count_param = params.get("count").ok_or(ApiError::InvalidCount)?;
    if !count_pattern().is_match(count_param) {
        return Err(ApiError::InvalidCount);
    }
    // Digit strings beyond u64 range pass the regex but are still invalid.
    let count: u64 = count_param.parse().map_err(|_| ApiError::InvalidCount)?;

    tracing::debug!("Setting counter to {}", count);

    let counter = state.store.set_value(count);
    Ok(format!(
        "Manta count set to {} {}",
        counter.value,
        kill_word(counter.value)
    ))
}

/// Dashboard stats: counter, request tallies, and reset history
/// (most recent first). Read-only.
#[debug_handler]
pub async fn get_stats(State(state): State<Arc<ApiState>>) -> Json<Stats> {
    tracing::debug!("Fetching stats");

    Json(state.store.snapshot())
}

/// Manual reset from the dashboard.
#[debug_handler]
pub async fn reset_counter(State(state): State<Arc<ApiState>>) -> Json<Counter> {
    tracing::debug!("Manual counter reset");

    Json(state.store.reset(RESET_BY_MANUAL))
}

/// Health check endpoint
#[debug_handler]
pub async fn health_check() -> Json<HashMap<String, String>> {
    let mut response = HashMap::new();
    response.insert("status".to_string(), "healthy".to_string());
    response.insert("service".to_string(), "mantacount-api".to_string());
    Json(response)
}
