//! Delayed record removal.
//!
//! Confirming a delete does not drop the record right away. Its key joins the
//! removal set so the table can render it fading out, and a one-shot timer is
//! armed. When that timer fires the record leaves both the store and the
//! removal set in the same step.
//!
//! Every removal uses the same [`REMOVAL_DELAY`], so timers fire in the order
//! they were armed. Each armed timer gets a [`TimerId`] and the queue pairs
//! each firing with the oldest pending entry.

use crate::domain::RecordKey;
use std::collections::VecDeque;
use std::time::Duration;

/// How long a confirmed delete stays visible before the record is removed.
pub const REMOVAL_DELAY: Duration = Duration::from_millis(700);

/// Handle of one armed removal timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Numeric value, for logs.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Presentation hint attached to each displayed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHint {
    /// Present and not being removed.
    FadingIn,
    /// Confirmed for deletion, waiting for its timer.
    FadingOut,
}

/// Records marked for removal, oldest first.
#[derive(Debug, Clone, Default)]
pub struct RemovalQueue {
    pending: VecDeque<(TimerId, RecordKey)>,
    next_id: u64,
}

impl RemovalQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` for removal and returns the timer to arm.
    ///
    /// Returns `None` when `key` is already marked; a second confirmation
    /// must not arm a second timer.
    pub fn mark(&mut self, key: RecordKey) -> Option<TimerId> {
        if self.contains(&key) {
            tracing::debug!(key = %key, "record already marked for removal");
            return None;
        }

        let id = TimerId(self.next_id);
        self.next_id += 1;
        tracing::debug!(key = %key, timer = id.get(), "record marked for removal");
        self.pending.push_back((id, key));
        Some(id)
    }

    /// Consumes the oldest pending removal when its timer fires.
    ///
    /// Returns the key to delete from the store, or `None` if nothing was
    /// pending.
    pub fn fire(&mut self) -> Option<(TimerId, RecordKey)> {
        let entry = self.pending.pop_front();
        if let Some((id, key)) = &entry {
            tracing::debug!(key = %key, timer = id.get(), "removal timer fired");
        } else {
            tracing::debug!("removal timer fired with nothing pending");
        }
        entry
    }

    /// Returns `true` if `key` is waiting for removal.
    #[must_use]
    pub fn contains(&self, key: &RecordKey) -> bool {
        self.pending.iter().any(|(_, k)| k == key)
    }

    /// Presentation hint for the row with `key`.
    #[must_use]
    pub fn hint(&self, key: &RecordKey) -> RowHint {
        if self.contains(key) {
            RowHint::FadingOut
        } else {
            RowHint::FadingIn
        }
    }

    /// Number of pending removals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` when nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
