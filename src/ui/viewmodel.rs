//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed
//! by the renderer. They carry display-ready text and flags only; every
//! decision about filtering, sorting, and highlighting is already made.
//!
//! # Example
//!
//! ```rust
//! use zelltable::app::removal::RowHint;
//! use zelltable::ui::viewmodel::{CellHighlights, DisplayItem};
//!
//! let item = DisplayItem {
//!     name: "Ann".to_string(),
//!     date: "09-01-2024".to_string(),
//!     age: "30".to_string(),
//!     is_selected: true,
//!     hint: RowHint::FadingIn,
//!     highlights: CellHighlights::default(),
//! };
//! assert!(item.is_selected);
//! ```

use crate::app::modes::PromptChoice;
use crate::app::removal::RowHint;
use crate::app::view::SortOrder;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows to display, already windowed to the available height.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    /// Table column titles with sort indicators.
    pub columns: Vec<ColumnHeader>,

    pub footer: FooterInfo,

    /// Message shown instead of rows when there is nothing to display.
    pub empty_state: Option<EmptyState>,

    /// Present in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Present while the create/edit modal is open.
    pub modal: Option<ModalInfo>,

    /// Present while the delete prompt is open.
    pub prompt: Option<PromptInfo>,
}

/// Display information for one record row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub name: String,
    pub date: String,
    pub age: String,

    /// Whether this row is under the cursor.
    pub is_selected: bool,

    /// Fade-in for ordinary rows, fade-out for rows awaiting removal.
    pub hint: RowHint,

    /// Search matches per cell.
    pub highlights: CellHighlights,
}

/// Character ranges to highlight in each cell of a row.
///
/// Each tuple is `(start, end)` in character indices, end exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellHighlights {
    pub name: Vec<(usize, usize)>,
    pub date: Vec<(usize, usize)>,
    pub age: Vec<(usize, usize)>,
}

/// One table column title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub title: String,
    /// Fixed width in cells; `None` takes the remaining width.
    pub width: Option<usize>,
    /// Direction when this column is the active sort.
    pub sort: Option<SortOrder>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Localized label shown before the query.
    pub label: String,
    pub query: String,
}

/// The create/edit modal.
#[derive(Debug, Clone)]
pub struct ModalInfo {
    pub title: String,
    pub fields: Vec<FormFieldInfo>,
    /// Save/cancel hint line.
    pub actions: String,
}

/// One labelled input in the modal.
#[derive(Debug, Clone)]
pub struct FormFieldInfo {
    pub label: String,
    pub value: String,
    /// Placeholder shown while `value` is empty.
    pub placeholder: String,
    pub is_focused: bool,
    pub error: Option<String>,
}

/// The delete confirmation prompt.
#[derive(Debug, Clone)]
pub struct PromptInfo {
    pub message: String,
    /// Name of the record about to be deleted.
    pub subject: String,
    pub yes: String,
    pub no: String,
    pub choice: PromptChoice,
}
