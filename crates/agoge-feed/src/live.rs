//! Bounded, newest-first activity feed.
//!
//! `LiveFeed` owns the merge policy the generator deliberately leaves to its
//! callers: each refresh batch is placed in front of what is already shown and
//! the result is cut to `max_len`. Each batch keeps the descending order the
//! generator gave it; the feed does not re-sort across batches.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::debug;

use agoge_contracts::{
    activity::{Activity, ActivityKind},
    error::{AgogeError, AgogeResult},
};

/// Retained length used by the live network page.
pub const DEFAULT_MAX_LEN: usize = 50;

/// A point-in-time copy of the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSnapshot {
    pub activities: Vec<Activity>,
    /// Number of refresh batches merged since the last `replace`.
    pub refreshes: u64,
}

#[derive(Debug, Default)]
struct FeedState {
    activities: Vec<Activity>,
    refreshes: u64,
}

/// A shareable activity feed with a fixed maximum length.
///
/// Cloning a `LiveFeed` yields another handle onto the same feed.
#[derive(Debug, Clone)]
pub struct LiveFeed {
    max_len: usize,
    state: Arc<Mutex<FeedState>>,
}

impl LiveFeed {
    pub fn new(max_len: usize) -> Self {
        Self { max_len, state: Arc::new(Mutex::new(FeedState::default())) }
    }

    /// Discard the current feed and show `initial` instead (truncated).
    pub fn replace(&self, mut initial: Vec<Activity>) -> AgogeResult<()> {
        initial.truncate(self.max_len);
        let mut state = self.lock()?;
        state.activities = initial;
        state.refreshes = 0;
        Ok(())
    }

    /// Put `batch` in front of the current feed, then truncate to `max_len`.
    ///
    /// Returns the number of activities dropped off the tail.
    pub fn prepend(&self, batch: Vec<Activity>) -> AgogeResult<usize> {
        let mut state = self.lock()?;

        let mut merged = batch;
        merged.append(&mut state.activities);
        let dropped = merged.len().saturating_sub(self.max_len);
        merged.truncate(self.max_len);

        state.activities = merged;
        state.refreshes += 1;

        debug!(
            len = state.activities.len(),
            dropped,
            refreshes = state.refreshes,
            "feed refreshed"
        );

        Ok(dropped)
    }

    pub fn snapshot(&self) -> AgogeResult<FeedSnapshot> {
        let state = self.lock()?;
        Ok(FeedSnapshot { activities: state.activities.clone(), refreshes: state.refreshes })
    }

    /// Activities of one kind, or all of them for `None`, in feed order.
    pub fn filter(&self, kind: Option<ActivityKind>) -> AgogeResult<Vec<Activity>> {
        let state = self.lock()?;
        Ok(state
            .activities
            .iter()
            .filter(|a| kind.map_or(true, |k| a.kind == k))
            .cloned()
            .collect())
    }

    pub fn len(&self) -> AgogeResult<usize> {
        Ok(self.lock()?.activities.len())
    }

    pub fn is_empty(&self) -> AgogeResult<bool> {
        Ok(self.lock()?.activities.is_empty())
    }

    fn lock(&self) -> AgogeResult<MutexGuard<'_, FeedState>> {
        self.state.lock().map_err(|e| AgogeError::StoreUnavailable {
            reason: format!("feed lock poisoned: {}", e),
        })
    }
}

impl Default for LiveFeed {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEN)
    }
}
