//! In-memory counter store.
//!
//! The store is the only stateful component in the service. Handlers run on
//! a multi-threaded runtime, so the state tuple sits behind a mutex and
//! every operation locks, applies its transition, and returns an owned
//! snapshot. No operation blocks, awaits, or fails.

use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

use crate::models::{Counter, HistoryEntry, Stats};

/// Trigger tag recorded by dashboard-initiated resets.
pub const RESET_BY_MANUAL: &str = "manual";
/// Trigger tag recorded by the in-chat egg-found reset.
pub const RESET_BY_EGG_FOUND: &str = "eggfound";

#[derive(Debug, Default)]
struct StoreState {
    value: u64,
    last_increment: Option<chrono::DateTime<Utc>>,
    total_requests: u64,
    manta_requests: u64,
    manta_add_requests: u64,
    history: Vec<HistoryEntry>,
}

impl StoreState {
    fn counter(&self) -> Counter {
        Counter {
            value: self.value,
            last_increment: self.last_increment,
            total_requests: self.total_requests,
        }
    }
}

/// Single source of truth for the kill counter and its telemetry.
///
/// Created once at process start with value 0, empty history, and zeroed
/// request counters; lives for the process lifetime. State is not persisted
/// anywhere.
#[derive(Debug, Default)]
pub struct CounterStore {
    inner: Mutex<StoreState>,
}

impl CounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock still holds a usable state tuple.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Read the current counter.
    ///
    /// Not side-effect-free: a read counts itself, bumping `total_requests`
    /// and `manta_requests`. Use [`CounterStore::snapshot`] for a
    /// non-mutating view.
    pub fn read(&self) -> Counter {
        let mut state = self.lock();
        state.total_requests += 1;
        state.manta_requests += 1;
        state.counter()
    }

    /// Add one kill, stamping `last_increment` with the current time.
    pub fn increment(&self) -> Counter {
        let mut state = self.lock();
        state.value += 1;
        state.last_increment = Some(Utc::now());
        state.total_requests += 1;
        state.manta_add_requests += 1;
        state.counter()
    }

    /// Set the counter to an absolute value.
    ///
    /// The caller validates `value` at the boundary; the store trusts it.
    /// Bumps `total_requests` only — neither per-endpoint sub-counter
    /// tracks sets, so the sub-counters can under-count the total.
    pub fn set_value(&self, value: u64) -> Counter {
        let mut state = self.lock();
        state.value = value;
        state.last_increment = Some(Utc::now());
        state.total_requests += 1;
        state.counter()
    }

    /// Reset the counter, recording the outgoing value in the history log.
    ///
    /// The very first reset of a still-zero store appends nothing; once
    /// either the value is positive or history exists, every reset is
    /// recorded, including resets from zero. History is append-only in
    /// insertion order and survives the reset itself.
    pub fn reset(&self, reset_by: &str) -> Counter {
        let mut state = self.lock();
        if state.value > 0 || !state.history.is_empty() {
            let entry = HistoryEntry {
                value: state.value,
                reset_at: Utc::now(),
                reset_by: reset_by.to_string(),
            };
            state.history.push(entry);
        }
        state.value = 0;
        state.last_increment = None;
        state.total_requests = 0;
        state.manta_requests = 0;
        state.manta_add_requests = 0;
        state.counter()
    }

    /// Full stats aggregate for the dashboard, history most-recent-first.
    ///
    /// Unlike [`CounterStore::read`], this does not touch any counter.
    pub fn snapshot(&self) -> Stats {
        let state = self.lock();
        let mut history = state.history.clone();
        history.reverse();
        Stats {
            value: state.value,
            last_increment: state.last_increment,
            total_requests: state.total_requests,
            manta_requests: state.manta_requests,
            manta_add_requests: state.manta_add_requests,
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_is_zeroed() {
        let store = CounterStore::new();
        let stats = store.snapshot();
        assert_eq!(stats.value, 0);
        assert_eq!(stats.last_increment, None);
        assert_eq!(stats.total_requests, 0);
        assert_eq!(stats.manta_requests, 0);
        assert_eq!(stats.manta_add_requests, 0);
        assert!(stats.history.is_empty());
    }

    #[test]
    fn increment_counts_every_call() {
        let store = CounterStore::new();
        for _ in 0..5 {
            store.increment();
        }
        let stats = store.snapshot();
        assert_eq!(stats.value, 5);
        assert_eq!(stats.manta_add_requests, 5);
        assert_eq!(stats.total_requests, 5);
        assert!(stats.last_increment.is_some());
    }

    #[test]
    fn read_counts_itself() {
        let store = CounterStore::new();
        let first = store.read();
        assert_eq!(first.total_requests, 1);
        let second = store.read();
        assert_eq!(second.total_requests, 2);
        assert_eq!(store.snapshot().manta_requests, 2);
    }

    #[test]
    fn set_value_is_visible_to_next_read() {
        let store = CounterStore::new();
        store.set_value(42);
        assert_eq!(store.read().value, 42);
    }

    #[test]
    fn set_value_bumps_only_total_requests() {
        let store = CounterStore::new();
        store.set_value(7);
        let stats = store.snapshot();
        assert_eq!(stats.total_requests, 1);
        assert_eq!(stats.manta_requests, 0);
        assert_eq!(stats.manta_add_requests, 0);
        assert!(stats.last_increment.is_some());
    }

    #[test]
    fn reset_zeroes_value_timestamp_and_counters() {
        let store = CounterStore::new();
        store.increment();
        store.increment();
        store.read();
        let counter = store.reset(RESET_BY_MANUAL);
        assert_eq!(counter.value, 0);
        assert_eq!(counter.last_increment, None);
        assert_eq!(counter.total_requests, 0);
        let stats = store.snapshot();
        assert_eq!(stats.manta_requests, 0);
        assert_eq!(stats.manta_add_requests, 0);
    }

    #[test]
    fn reset_records_outgoing_value_and_trigger() {
        let store = CounterStore::new();
        store.increment();
        store.increment();
        store.reset(RESET_BY_EGG_FOUND);
        let stats = store.snapshot();
        assert_eq!(stats.history.len(), 1);
        assert_eq!(stats.history[0].value, 2);
        assert_eq!(stats.history[0].reset_by, RESET_BY_EGG_FOUND);
    }

    #[test]
    fn first_reset_from_zero_appends_nothing_second_does() {
        let store = CounterStore::new();
        store.reset(RESET_BY_MANUAL);
        assert!(store.snapshot().history.is_empty());

        // value 0 but history non-empty from here on, so every reset records
        store.increment();
        store.reset(RESET_BY_MANUAL);
        store.reset(RESET_BY_MANUAL);
        let stats = store.snapshot();
        assert_eq!(stats.history.len(), 2);
        assert_eq!(stats.history[0].value, 0);
        assert_eq!(stats.history[1].value, 1);
    }

    #[test]
    fn snapshot_history_is_most_recent_first() {
        let store = CounterStore::new();
        for kills in [3u64, 5, 8] {
            store.set_value(kills);
            store.reset(RESET_BY_EGG_FOUND);
        }
        let stats = store.snapshot();
        let values: Vec<u64> = stats.history.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![8, 5, 3]);
    }

    #[test]
    fn snapshot_does_not_mutate() {
        let store = CounterStore::new();
        store.increment();
        store.snapshot();
        store.snapshot();
        let stats = store.snapshot();
        assert_eq!(stats.total_requests, 1);
        assert_eq!(stats.manta_requests, 0);
    }

    #[test]
    fn snapshot_and_read_agree_on_value() {
        let store = CounterStore::new();
        store.set_value(9);
        assert_eq!(store.snapshot().value, store.read().value);
    }
}
