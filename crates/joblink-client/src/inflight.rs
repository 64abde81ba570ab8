//! In-flight action guard.
//!
//! A rapidly repeated action (double-click "Follow") would otherwise race
//! and produce duplicate requests. The registry keeps one boolean per
//! (action, target) pair; a second begin while the first guard is alive is
//! refused, and the slot frees itself when the guard drops — including on
//! the error path. This is deliberately not a general deduplication layer.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::metrics::record_suppressed;

/// Guarded action kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Follow,
    Unfollow,
    Apply,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Follow => "follow",
            Action::Unfollow => "unfollow",
            Action::Apply => "apply",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks which (action, target) pairs currently have a request in flight.
#[derive(Debug, Default)]
pub struct InflightRegistry {
    active: Mutex<HashSet<(Action, i64)>>,
}

impl InflightRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Claim the (action, target) slot.
    ///
    /// Returns `None` when an identical action is already in flight; the
    /// caller is expected to skip the request entirely.
    pub fn try_begin(self: &Arc<Self>, action: Action, target: i64) -> Option<InflightGuard> {
        let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        if !active.insert((action, target)) {
            record_suppressed(action.as_str());
            return None;
        }
        Some(InflightGuard {
            registry: Arc::clone(self),
            action,
            target,
        })
    }

    fn release(&self, action: Action, target: i64) {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&(action, target));
    }
}

/// RAII claim on an (action, target) slot.
#[derive(Debug)]
pub struct InflightGuard {
    registry: Arc<InflightRegistry>,
    action: Action,
    target: i64,
}

impl Drop for InflightGuard {
    fn drop(&mut self) {
        self.registry.release(self.action, self.target);
    }
}
