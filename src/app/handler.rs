//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! timer firings, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState`, `EditSession`, and `RemovalQueue`
//! 4. Actions are collected and returned for execution
//!
//! Open overlays take precedence: while the delete prompt is open only prompt
//! events act, and while the edit modal is open characters go to the form.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Input**: `Char`, `Backspace`, `Escape`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//! - **Records**: `AddRecord`, `EditSelected`, `DeleteSelected`, `SortBy`
//! - **Form**: `NextField`, `PrevField`, `SubmitForm`, `CancelForm`
//! - **Prompt**: `ConfirmDelete`, `DeclineDelete`, `TogglePromptChoice`, `AcceptPrompt`
//! - **Timer**: `RemovalTimerFired`
//!
//! # Example
//!
//! ```rust
//! use zelltable::app::{handle_event, AppState, Event};
//! use zelltable::ui::{strings::Locale, Theme};
//!
//! let mut state = AppState::new(Theme::default(), Locale::En);
//! let (should_render, actions) = handle_event(&mut state, &Event::AddRecord)?;
//! assert!(should_render && actions.is_empty());
//! assert!(state.session.is_open());
//! # Ok::<(), zelltable::TableError>(())
//! ```

use super::modes::{DeletePrompt, InputMode, PromptChoice, SearchFocus};
use super::removal::{RowHint, REMOVAL_DELAY};
use super::session::Committed;
use super::view::{SortColumn, SortDirective};
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input or timers.
///
/// The handler processes them one at a time, so every transition is
/// deterministic given the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves selection down by one row (wraps to top).
    KeyDown,
    /// Moves selection up by one row (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input (from navigating).
    FocusSearchBar,
    /// Focuses the search results (from typing).
    FocusResults,
    /// Leaves search mode and clears the query.
    ExitSearch,

    /// A typed character, routed to the form or the search query.
    Char(char),
    /// Deletes the last character of the form field or search query.
    Backspace,
    /// Closes whatever is open: prompt, modal, or search.
    Escape,

    /// Opens the modal in create mode.
    AddRecord,
    /// Opens the modal in edit mode for the selected record.
    EditSelected,
    /// Asks for confirmation before deleting the selected record.
    DeleteSelected,
    /// Cycles the sort on a column.
    SortBy(SortColumn),

    /// Moves form focus to the next field.
    NextField,
    /// Moves form focus to the previous field.
    PrevField,
    /// Validates the form and commits it on success.
    SubmitForm,
    /// Closes the modal without saving.
    CancelForm,

    /// Answers "yes" to the delete prompt.
    ConfirmDelete,
    /// Answers "no" to the delete prompt.
    DeclineDelete,
    /// Moves the prompt highlight to the other answer.
    TogglePromptChoice,
    /// Answers the prompt with the highlighted choice.
    AcceptPrompt,

    /// A removal timer armed by [`Action::ScheduleRemoval`] elapsed.
    RemovalTimerFired,
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI changed and the side effects
/// the runtime must perform, in order.
///
/// # Errors
///
/// Reserved for failures outside the table itself; every current event is
/// handled without error. Form validation failures are not errors here: the
/// session stays open and the field messages render with the form.
///
/// # Example
///
/// ```rust
/// use zelltable::app::{handle_event, AppState, Event};
/// use zelltable::ui::{strings::Locale, Theme};
///
/// let mut state = AppState::new(Theme::default(), Locale::En);
/// let (should_render, _) = handle_event(&mut state, &Event::KeyDown)?;
/// assert!(!should_render); // nothing to move through yet
/// # Ok::<(), zelltable::TableError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if state.prompt.is_some() {
        return Ok(handle_prompt_event(state, *event));
    }
    if state.session.is_open() {
        return Ok(handle_form_event(state, *event));
    }

    match event {
        Event::KeyDown => {
            if state.visible.is_empty() {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.visible.is_empty() {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query = String::new();
            state.refresh_view();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query = %state.search_query, "clearing search");
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            state.refresh_view();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, char = %c, "search query updated");
            state.refresh_view();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            state.search_query.pop();
            state.refresh_view();
            Ok((true, vec![]))
        }
        Event::AddRecord => {
            state.session.open_create();
            Ok((true, vec![]))
        }
        Event::EditSelected => {
            let Some(record) = state.selected_record() else {
                tracing::debug!("no record selected to edit");
                return Ok((false, vec![]));
            };
            if state.removals.hint(&record.key) == RowHint::FadingOut {
                tracing::debug!(key = %record.key, "record is being removed, edit ignored");
                return Ok((false, vec![]));
            }
            let record = record.clone();
            state.session.open_edit(&record);
            Ok((true, vec![]))
        }
        Event::DeleteSelected => {
            let Some(record) = state.selected_record() else {
                tracing::debug!("no record selected to delete");
                return Ok((false, vec![]));
            };
            if state.removals.contains(&record.key) {
                tracing::debug!(key = %record.key, "record already being removed");
                return Ok((false, vec![]));
            }
            state.prompt = Some(DeletePrompt::new(record.key.clone(), record.name.clone()));
            Ok((true, vec![]))
        }
        Event::SortBy(column) => {
            state.sort = SortDirective::cycle(state.sort, *column);
            tracing::debug!(sort = ?state.sort, "sort changed");
            state.refresh_view();
            Ok((true, vec![]))
        }
        Event::RemovalTimerFired => Ok(complete_removal(state)),
        Event::NextField
        | Event::PrevField
        | Event::SubmitForm
        | Event::CancelForm
        | Event::ConfirmDelete
        | Event::DeclineDelete
        | Event::TogglePromptChoice
        | Event::AcceptPrompt => Ok((false, vec![])),
    }
}

/// Events while the delete prompt is open.
fn handle_prompt_event(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    match event {
        Event::ConfirmDelete => confirm_delete(state),
        Event::DeclineDelete | Event::Escape => {
            tracing::debug!("delete prompt declined");
            state.prompt = None;
            (true, vec![])
        }
        Event::TogglePromptChoice => {
            if let Some(prompt) = state.prompt.as_mut() {
                prompt.choice = prompt.choice.toggled();
            }
            (true, vec![])
        }
        Event::AcceptPrompt => match state.prompt.as_ref().map(|p| p.choice) {
            Some(PromptChoice::Yes) => confirm_delete(state),
            _ => {
                state.prompt = None;
                (true, vec![])
            }
        },
        Event::RemovalTimerFired => complete_removal(state),
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        _ => (false, vec![]),
    }
}

/// Events while the create/edit modal is open.
fn handle_form_event(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    match event {
        Event::Char(c) => {
            let changed = state.session.form_mut().is_some_and(|form| form.insert_char(c));
            (changed, vec![])
        }
        Event::Backspace => {
            let changed = state.session.form_mut().is_some_and(|form| form.backspace());
            (changed, vec![])
        }
        Event::NextField | Event::KeyDown => {
            if let Some(form) = state.session.form_mut() {
                form.focus_next();
            }
            (true, vec![])
        }
        Event::PrevField | Event::KeyUp => {
            if let Some(form) = state.session.form_mut() {
                form.focus_prev();
            }
            (true, vec![])
        }
        Event::SubmitForm => {
            let strings = state.strings();
            match state.session.confirm(&mut state.store, strings) {
                Ok(Some(committed)) => {
                    state.refresh_view();
                    match committed {
                        Committed::Added(key) | Committed::Updated(key) => state.select_key(&key),
                        Committed::Vanished(key) => {
                            tracing::debug!(key = %key, "edited record was removed meanwhile");
                        }
                    }
                    (true, vec![])
                }
                Ok(None) => (false, vec![]),
                Err(errors) => {
                    tracing::debug!(invalid_fields = errors.len(), "form kept open");
                    (true, vec![])
                }
            }
        }
        Event::CancelForm | Event::Escape => {
            state.session.cancel();
            (true, vec![])
        }
        Event::RemovalTimerFired => complete_removal(state),
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        _ => (false, vec![]),
    }
}

/// Moves the prompted record into the removal queue and arms its timer.
fn confirm_delete(state: &mut AppState) -> (bool, Vec<Action>) {
    let Some(prompt) = state.prompt.take() else {
        return (false, vec![]);
    };

    if !state.store.contains(&prompt.key) {
        tracing::debug!(key = %prompt.key, "record already absent, nothing to delete");
        return (true, vec![]);
    }

    match state.removals.mark(prompt.key) {
        Some(timer) => (
            true,
            vec![Action::ScheduleRemoval {
                timer,
                delay: REMOVAL_DELAY,
            }],
        ),
        None => (true, vec![]),
    }
}

/// Removes the oldest pending record once its timer has elapsed.
///
/// The store and the removal set change together, before the next render.
fn complete_removal(state: &mut AppState) -> (bool, Vec<Action>) {
    let Some((_timer, key)) = state.removals.fire() else {
        return (false, vec![]);
    };

    if state.prompt.as_ref().is_some_and(|p| p.key == key) {
        state.prompt = None;
    }
    state.store.remove(&key);
    state.refresh_view();
    (true, vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::removal::RowHint;
    use crate::domain::Field;
    use crate::ui::strings::Locale;
    use crate::ui::Theme;
    use chrono::NaiveDate;

    fn new_state() -> AppState {
        AppState::new(Theme::default(), Locale::En)
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            send(state, Event::Char(c));
        }
    }

    fn add_record(state: &mut AppState, name: &str, date: &str, age: &str) {
        send(state, Event::AddRecord);
        type_text(state, name);
        send(state, Event::NextField);
        type_text(state, date);
        send(state, Event::NextField);
        type_text(state, age);
        send(state, Event::SubmitForm);
    }

    fn search(state: &mut AppState, query: &str) {
        send(state, Event::SearchMode);
        type_text(state, query);
    }

    fn delete_selected(state: &mut AppState) -> Vec<Action> {
        send(state, Event::DeleteSelected);
        send(state, Event::ConfirmDelete).1
    }

    #[test]
    fn add_search_edit_delete_scenario() {
        let mut state = new_state();

        add_record(&mut state, "Ann", "09-01-2024", "30");
        assert!(!state.session.is_open());
        assert_eq!(state.store.len(), 1);
        let key = state.store.as_slice()[0].key.clone();
        assert_eq!(state.store.as_slice()[0].date, "09-01-2024");

        search(&mut state, "ann");
        assert_eq!(state.visible, vec![key.clone()]);
        send(&mut state, Event::ExitSearch);
        search(&mut state, "zzz");
        assert!(state.visible.is_empty());
        send(&mut state, Event::ExitSearch);

        send(&mut state, Event::EditSelected);
        send(&mut state, Event::NextField);
        send(&mut state, Event::NextField);
        send(&mut state, Event::Backspace);
        type_text(&mut state, "1");
        send(&mut state, Event::SubmitForm);
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.store.as_slice()[0].key, key);
        assert_eq!(state.store.as_slice()[0].age, 31);

        let actions = delete_selected(&mut state);
        assert_eq!(
            actions,
            vec![Action::ScheduleRemoval {
                timer: actions_timer(&actions),
                delay: REMOVAL_DELAY,
            }]
        );
        assert_eq!(state.store.len(), 1);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items[0].hint, RowHint::FadingOut);

        let (render, _) = send(&mut state, Event::RemovalTimerFired);
        assert!(render);
        assert!(state.store.is_empty());
        assert!(state.removals.is_empty());
        assert!(state.visible.is_empty());
    }

    fn actions_timer(actions: &[Action]) -> crate::app::removal::TimerId {
        match actions.first() {
            Some(Action::ScheduleRemoval { timer, .. }) => *timer,
            other => panic!("expected a scheduled removal, got {other:?}"),
        }
    }

    #[test]
    fn typed_digits_never_reach_the_name() {
        let mut state = new_state();
        add_record(&mut state, "A1n2n", "09-01-2024", "30");
        assert_eq!(state.store.as_slice()[0].name, "Ann");
    }

    #[test]
    fn out_of_range_age_keeps_modal_open() {
        let mut state = new_state();
        add_record(&mut state, "Ann", "09-01-2024", "150");

        assert!(state.session.is_open());
        assert!(state.store.is_empty());
        let form = state.session.form().unwrap();
        assert_eq!(form.errors().get(Field::Age), Some("Age must be between 0 and 100"));
        assert_eq!(form.errors().get(Field::Name), None);
    }

    #[test]
    fn empty_name_keeps_modal_open() {
        let mut state = new_state();
        add_record(&mut state, "", "09-01-2024", "30");

        assert!(state.session.is_open());
        assert!(state.store.is_empty());
        assert!(state.session.form().unwrap().errors().get(Field::Name).is_some());
    }

    #[test]
    fn cancel_discards_without_mutation() {
        let mut state = new_state();
        send(&mut state, Event::AddRecord);
        type_text(&mut state, "Ann");
        send(&mut state, Event::Escape);

        assert!(!state.session.is_open());
        assert!(state.store.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn edit_form_round_trips_values() {
        let mut state = new_state();
        add_record(&mut state, "Ann", "09-01-2024", "30");

        send(&mut state, Event::EditSelected);
        let form = state.session.form().unwrap();
        assert_eq!(form.name(), "Ann");
        assert_eq!(form.date_value(), NaiveDate::from_ymd_opt(2024, 1, 9));
        assert_eq!(form.age_value(), Some(30));
        assert_eq!(state.session.editing_record(), state.store.as_slice().first());
    }

    #[test]
    fn declined_prompt_changes_nothing() {
        let mut state = new_state();
        add_record(&mut state, "Ann", "09-01-2024", "30");

        send(&mut state, Event::DeleteSelected);
        assert!(state.prompt.is_some());
        let (_, actions) = send(&mut state, Event::DeclineDelete);

        assert!(actions.is_empty());
        assert!(state.prompt.is_none());
        assert!(state.removals.is_empty());
        assert_eq!(state.store.len(), 1);
    }

    #[test]
    fn accept_prompt_uses_highlighted_choice() {
        let mut state = new_state();
        add_record(&mut state, "Ann", "09-01-2024", "30");

        send(&mut state, Event::DeleteSelected);
        let (_, actions) = send(&mut state, Event::AcceptPrompt);
        assert!(actions.is_empty());
        assert!(state.removals.is_empty());

        send(&mut state, Event::DeleteSelected);
        send(&mut state, Event::TogglePromptChoice);
        let (_, actions) = send(&mut state, Event::AcceptPrompt);
        assert_eq!(actions.len(), 1);
        assert_eq!(state.removals.len(), 1);
    }

    #[test]
    fn confirming_twice_before_the_delay_removes_once() {
        let mut state = new_state();
        add_record(&mut state, "Ann", "09-01-2024", "30");
        add_record(&mut state, "Bob", "10-01-2024", "40");
        state.selected_index = 0;
        let ann = state.selected_record().unwrap().key.clone();

        assert_eq!(delete_selected(&mut state).len(), 1);

        // The row is fading, so the delete key does not reopen the prompt.
        let (render, _) = send(&mut state, Event::DeleteSelected);
        assert!(!render);
        assert!(state.prompt.is_none());

        // A prompt that was already open when the first confirm landed.
        state.prompt = Some(DeletePrompt::new(ann.clone(), "Ann".to_string()));
        let (_, actions) = send(&mut state, Event::ConfirmDelete);
        assert!(actions.is_empty());
        assert_eq!(state.removals.len(), 1);

        send(&mut state, Event::RemovalTimerFired);
        assert!(!state.store.contains(&ann));
        assert_eq!(state.store.len(), 1);

        let (render, _) = send(&mut state, Event::RemovalTimerFired);
        assert!(!render);
        assert_eq!(state.store.len(), 1);
    }

    #[test]
    fn timer_fires_while_modal_is_open() {
        let mut state = new_state();
        add_record(&mut state, "Ann", "09-01-2024", "30");
        delete_selected(&mut state);

        send(&mut state, Event::AddRecord);
        type_text(&mut state, "Bob");
        send(&mut state, Event::RemovalTimerFired);

        assert!(state.store.is_empty());
        assert!(state.session.is_open());
        assert_eq!(state.session.form().unwrap().name(), "Bob");
    }

    #[test]
    fn fading_rows_cannot_be_edited() {
        let mut state = new_state();
        add_record(&mut state, "Ann", "09-01-2024", "30");
        delete_selected(&mut state);

        let (render, _) = send(&mut state, Event::EditSelected);
        assert!(!render);
        assert!(!state.session.is_open());
    }

    #[test]
    fn sort_cycles_and_reorders_view() {
        let mut state = new_state();
        add_record(&mut state, "Bob", "01-02-2024", "40");
        add_record(&mut state, "Ann", "09-01-2024", "30");

        let names = |s: &AppState| -> Vec<String> {
            s.visible_records().iter().map(|r| r.name.clone()).collect()
        };

        send(&mut state, Event::SortBy(SortColumn::Date));
        assert_eq!(names(&state), vec!["Ann", "Bob"]);
        send(&mut state, Event::SortBy(SortColumn::Date));
        assert_eq!(names(&state), vec!["Bob", "Ann"]);
        send(&mut state, Event::SortBy(SortColumn::Date));
        assert_eq!(state.sort, None);
        assert_eq!(names(&state), vec!["Bob", "Ann"]);
    }

    #[test]
    fn new_record_becomes_selected() {
        let mut state = new_state();
        add_record(&mut state, "Bob", "01-02-2024", "40");
        add_record(&mut state, "Ann", "09-01-2024", "30");

        assert_eq!(state.selected_record().unwrap().name, "Ann");
    }

    #[test]
    fn characters_outside_search_are_ignored() {
        let mut state = new_state();
        let (render, _) = send(&mut state, Event::Char('x'));
        assert!(!render);
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = new_state();
        assert_eq!(send(&mut state, Event::CloseFocus), (false, vec![Action::CloseFocus]));
    }
}
