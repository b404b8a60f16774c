//! Data contracts shared between the counter store and the HTTP surface.
//!
//! Field names serialize as camelCase so the JSON matches what the
//! dashboard client already consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the counter with its immediate metadata.
///
/// Returned by every mutating store operation; `last_increment` is `None`
/// until the first increment or set after a reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counter {
    pub value: u64,
    pub last_increment: Option<DateTime<Utc>>,
    pub total_requests: u64,
}

/// Immutable record of a past counter value at the moment it was reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub value: u64,
    pub reset_at: DateTime<Utc>,
    /// Trigger tag, conventionally "manual" or "eggfound".
    pub reset_by: String,
}

/// Dashboard-facing aggregate: the counter fields, the per-endpoint request
/// tallies, and the full reset history ordered most-recent-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub value: u64,
    pub last_increment: Option<DateTime<Utc>>,
    pub total_requests: u64,
    pub manta_requests: u64,
    pub manta_add_requests: u64,
    pub history: Vec<HistoryEntry>,
}
