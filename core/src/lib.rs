//! MantaCount Core Module
//!
//! The core module owns the in-memory kill counter, its request telemetry,
//! and the reset history. It is the single source of truth for the service;
//! the HTTP layer calls into it and formats the returned snapshots.

pub mod models;
pub mod store;

pub use models::{Counter, HistoryEntry, Stats};
pub use store::{CounterStore, RESET_BY_EGG_FOUND, RESET_BY_MANUAL};
