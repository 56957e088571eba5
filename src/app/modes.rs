//! Input mode and prompt state types.
//!
//! These enums decide which keybindings are active and how typed characters
//! are routed. The edit session ([`super::session::EditSession`]) and the
//! delete prompt take precedence over the input mode while they are open.
//!
//! # State Machine
//!
//! - **Normal**: navigation, sorting, and row commands
//! - **Search**: typing a query or navigating its results
//!
//! # Example
//!
//! ```rust
//! use zelltable::app::modes::{InputMode, SearchFocus};
//!
//! let mode = InputMode::Search(SearchFocus::Typing);
//! assert!(mode.is_search());
//! ```

use crate::domain::RecordKey;

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Characters extend the query.
    Typing,

    /// j/k move through the results; `/` returns to typing.
    Navigating,
}

/// Current input handling mode of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// j/k (navigate), a (add), e (edit), d (delete), 1/2/3 (sort),
    /// / (search), q (quit).
    #[default]
    Normal,

    /// Active search; the footer shows search-specific keybindings.
    Search(SearchFocus),
}

impl InputMode {
    /// Returns `true` in either search focus.
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }
}

/// Highlighted answer in the delete prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptChoice {
    Yes,
    #[default]
    No,
}

impl PromptChoice {
    /// The other choice.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }
}

/// Open "are you sure?" prompt for deleting one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    /// Record the prompt asks about.
    pub key: RecordKey,
    /// Name shown in the prompt.
    pub name: String,
    /// Answer that Enter accepts.
    pub choice: PromptChoice,
}

impl DeletePrompt {
    /// Opens a prompt for the record with `key`, defaulting to "No".
    #[must_use]
    pub fn new(key: RecordKey, name: String) -> Self {
        Self {
            key,
            name,
            choice: PromptChoice::default(),
        }
    }
}
