//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin. It owns the record store and every piece of transient UI state:
//! the search query, the sort directive, the edit session, the delete
//! prompt, and the removal queue.
//!
//! # Architecture
//!
//! Core data (the store) is kept apart from derived state (the visible keys
//! and the selection). [`AppState::refresh_view`] recomputes the derived part
//! after every store or query change; view models are computed on demand.
//!
//! # Example
//!
//! ```rust
//! use zelltable::app::AppState;
//! use zelltable::ui::{strings::Locale, Theme};
//!
//! let mut state = AppState::new(Theme::default(), Locale::En);
//! state.search_query = "ann".to_string();
//! state.refresh_view();
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.display_items.is_empty());
//! ```

use super::modes::{DeletePrompt, InputMode, SearchFocus};
use super::removal::RemovalQueue;
use super::session::{EditMode, EditSession};
use super::view::{self, SortColumn, SortDirective};
use crate::domain::{Field, Record, RecordKey};
use crate::storage::RecordStore;
use crate::ui::strings::{Locale, Strings};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CellHighlights, ColumnHeader, DisplayItem, EmptyState, FooterInfo, FormFieldInfo, HeaderInfo,
    ModalInfo, PromptInfo, SearchBarInfo, UIViewModel,
};

/// Width of the NAME column, including its trailing gap.
pub const NAME_COLUMN_WIDTH: usize = 32;

/// Width of the DATE column, including its trailing gap.
pub const DATE_COLUMN_WIDTH: usize = 14;

/// Longest name shown before truncation.
const MAX_NAME_CHARS: usize = NAME_COLUMN_WIDTH - 2;

/// Central application state container.
///
/// Mutated by the event handler in response to user input and timer events.
#[derive(Debug, Clone)]
pub struct AppState {
    /// All records, in insertion order.
    pub store: RecordStore,

    /// Keys of the records currently displayed, in display order.
    ///
    /// Recomputed by `refresh_view()`; never edited directly.
    pub visible: Vec<RecordKey>,

    /// Zero-based index of the selected row within `visible`.
    pub selected_index: usize,

    /// Determines active keybindings when no modal or prompt is open.
    pub input_mode: InputMode,

    /// Case-insensitive substring filter.
    pub search_query: String,

    /// Active column sort, if any.
    pub sort: Option<SortDirective>,

    /// Create/edit modal state.
    pub session: EditSession,

    /// Open delete confirmation, if any.
    pub prompt: Option<DeletePrompt>,

    /// Records confirmed for deletion and waiting for their timer.
    pub removals: RemovalQueue,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Language of every rendered string and validation message.
    pub locale: Locale,
}

impl AppState {
    /// Creates an empty table with the given theme and locale.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zelltable::app::AppState;
    /// use zelltable::ui::{strings::Locale, Theme};
    ///
    /// let state = AppState::new(Theme::default(), Locale::En);
    /// assert!(state.store.is_empty());
    /// assert!(!state.session.is_open());
    /// ```
    #[must_use]
    pub fn new(theme: Theme, locale: Locale) -> Self {
        Self {
            store: RecordStore::new(),
            visible: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            sort: None,
            session: EditSession::Closed,
            prompt: None,
            removals: RemovalQueue::new(),
            theme,
            locale,
        }
    }

    /// The string table for the configured locale.
    #[must_use]
    pub fn strings(&self) -> &'static Strings {
        self.locale.strings()
    }

    /// Moves selection down by one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible.len();
    }

    /// Moves selection up by one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves the selection onto `key` if it is visible.
    pub fn select_key(&mut self, key: &RecordKey) {
        if let Some(index) = self.visible.iter().position(|k| k == key) {
            self.selected_index = index;
        }
    }

    /// The record under the cursor, if any.
    #[must_use]
    pub fn selected_record(&self) -> Option<&Record> {
        self.visible
            .get(self.selected_index)
            .and_then(|key| self.store.get(key))
    }

    /// Records currently displayed, in display order.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&Record> {
        self.visible
            .iter()
            .filter_map(|key| self.store.get(key))
            .collect()
    }

    /// Recomputes the visible rows from the store, query, and sort.
    ///
    /// The selection follows the previously selected record when it is still
    /// visible; otherwise it is clamped into range.
    pub fn refresh_view(&mut self) {
        let _span = tracing::debug_span!(
            "refresh_view",
            total_records = self.store.len(),
            query_len = self.search_query.len(),
            sort = ?self.sort
        )
        .entered();

        let previous = self.visible.get(self.selected_index).cloned();

        self.visible = view::compute_view(&self.store, &self.search_query, self.sort)
            .into_iter()
            .map(|record| record.key.clone())
            .collect();

        let followed = previous.and_then(|key| self.visible.iter().position(|k| *k == key));
        self.selected_index = match followed {
            Some(index) => index,
            None if self.visible.is_empty() => 0,
            None => self.selected_index.min(self.visible.len() - 1),
        };

        tracing::debug!(visible_count = self.visible.len(), "view refreshed");
    }

    /// Computes a renderable UI view model for the given terminal size.
    ///
    /// Rows are windowed around the selection so that the cursor stays
    /// visible, the way a scrolling list keeps its focus centered.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let records = self.visible_records();
        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(records.len());
        if visible_end - visible_start < available_rows && records.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items: Vec<DisplayItem> = records
            .get(visible_start..visible_end)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(relative_idx, record)| {
                self.compute_display_item(record, visible_start + relative_idx, cols)
            })
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(),
            columns: self.compute_columns(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            search_bar: self.compute_search_bar(),
            modal: self.compute_modal(),
            prompt: self.compute_prompt(),
        }
    }

    fn compute_display_item(&self, record: &Record, absolute_idx: usize, cols: usize) -> DisplayItem {
        let name = if record.name.chars().count() > MAX_NAME_CHARS {
            let kept: String = record.name.chars().take(MAX_NAME_CHARS - 3).collect();
            format!("{kept}...")
        } else {
            record.name.clone()
        };

        let age_width = cols.saturating_sub(NAME_COLUMN_WIDTH + DATE_COLUMN_WIDTH);
        let age = record.age.to_string();
        let age = if age.len() > age_width && age_width > 0 {
            age[..age_width].to_string()
        } else {
            age
        };

        let highlights = if self.search_query.is_empty() {
            CellHighlights::default()
        } else {
            CellHighlights {
                name: clip_ranges(view::match_ranges(&record.name, &self.search_query), &name),
                date: view::match_ranges(&record.date, &self.search_query),
                age: view::match_ranges(&age, &self.search_query),
            }
        };

        DisplayItem {
            name,
            date: record.date.clone(),
            age,
            is_selected: absolute_idx == self.selected_index,
            hint: self.removals.hint(&record.key),
            highlights,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(
                " {} ({}/{}) ",
                self.strings().title,
                self.visible.len(),
                self.store.len()
            ),
        }
    }

    fn compute_columns(&self) -> Vec<ColumnHeader> {
        let strings = self.strings();
        SortColumn::ALL
            .iter()
            .map(|&column| {
                let (title, width) = match column {
                    SortColumn::Name => (strings.column_name, Some(NAME_COLUMN_WIDTH)),
                    SortColumn::Date => (strings.column_date, Some(DATE_COLUMN_WIDTH)),
                    SortColumn::Age => (strings.column_age, None),
                };
                ColumnHeader {
                    title: title.to_string(),
                    width,
                    sort: self
                        .sort
                        .filter(|directive| directive.column == column)
                        .map(|directive| directive.order),
                }
            })
            .collect()
    }

    fn compute_footer(&self) -> FooterInfo {
        let strings = self.strings();
        let keybindings = if self.prompt.is_some() {
            strings.keys_prompt
        } else if self.session.is_open() {
            strings.keys_form
        } else {
            match self.input_mode {
                InputMode::Search(SearchFocus::Typing) => strings.keys_search_typing,
                InputMode::Search(SearchFocus::Navigating) => strings.keys_search_navigating,
                InputMode::Normal => strings.keys_normal,
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.visible.is_empty() {
            return None;
        }
        let strings = self.strings();
        let (message, subtitle) = if self.store.is_empty() {
            (strings.empty_message, strings.empty_subtitle)
        } else {
            (strings.no_matches_message, strings.no_matches_subtitle)
        };
        Some(EmptyState {
            message: message.to_string(),
            subtitle: subtitle.to_string(),
        })
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        self.input_mode.is_search().then(|| SearchBarInfo {
            label: self.strings().search_label.to_string(),
            query: self.search_query.clone(),
        })
    }

    fn compute_modal(&self) -> Option<ModalInfo> {
        let EditSession::Open { mode, form } = &self.session else {
            return None;
        };
        let strings = self.strings();

        let title = match mode {
            EditMode::Create => strings.add_title,
            EditMode::Edit(_) => strings.edit_title,
        };

        let fields = Field::ALL
            .iter()
            .map(|&field| {
                let (label, value, placeholder) = match field {
                    Field::Name => (strings.column_name, form.name(), ""),
                    Field::Date => (strings.column_date, form.date_text(), "DD-MM-YYYY"),
                    Field::Age => (strings.column_age, form.age_text(), "0-100"),
                };
                FormFieldInfo {
                    label: label.to_string(),
                    value: value.to_string(),
                    placeholder: placeholder.to_string(),
                    is_focused: form.focus() == field,
                    error: form.errors().get(field).map(str::to_string),
                }
            })
            .collect();

        Some(ModalInfo {
            title: title.to_string(),
            fields,
            actions: format!("Enter: {}  Esc: {}", strings.save, strings.cancel),
        })
    }

    fn compute_prompt(&self) -> Option<PromptInfo> {
        self.prompt.as_ref().map(|prompt| {
            let strings = self.strings();
            PromptInfo {
                message: strings.delete_prompt.to_string(),
                subject: prompt.name.clone(),
                yes: strings.yes.to_string(),
                no: strings.no.to_string(),
                choice: prompt.choice,
            }
        })
    }

    /// Rows left for table rows after the header, borders, column titles,
    /// footer, and (in search mode) the three-line search box.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(6),
            InputMode::Search(_) => total_rows.saturating_sub(9),
        }
    }
}

/// Drops highlight ranges that fall past the end of a truncated cell.
fn clip_ranges(ranges: Vec<(usize, usize)>, shown: &str) -> Vec<(usize, usize)> {
    let len = shown.chars().count();
    ranges
        .into_iter()
        .filter(|&(start, _)| start < len)
        .map(|(start, end)| (start, end.min(len)))
        .collect()
}
