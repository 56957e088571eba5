//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim (`main.rs`) turns each action into Zellij API calls, keeping
//! the application layer free of host dependencies.
//!
//! # Example
//!
//! ```rust
//! use zelltable::app::Action;
//!
//! let actions = vec![Action::CloseFocus];
//! assert_eq!(actions.len(), 1);
//! ```

use super::removal::TimerId;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit (pressing 'q').
    CloseFocus,

    /// Arms a one-shot timer for a pending removal.
    ///
    /// When it elapses the runtime must deliver
    /// [`Event::RemovalTimerFired`](super::Event::RemovalTimerFired).
    ScheduleRemoval {
        /// Handle of the pending removal, for logs.
        timer: TimerId,
        /// Time until the record is removed.
        delay: Duration,
    },
}
