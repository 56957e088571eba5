//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Draw the layout into a [`Frame`], then print it
//!
//! # Example
//!
//! ```rust
//! use zelltable::app::AppState;
//! use zelltable::ui::{render_to_string, strings::Locale, Theme};
//!
//! let state = AppState::new(Theme::default(), Locale::En);
//! let screen = render_to_string(&state, 24, 80);
//! assert!(screen.contains("No records yet"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Frame;

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; the plugin host does that before each render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders the plugin UI into a string of text and ANSI escapes.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    let mut frame = Frame::new();
    components::render_layout(&mut frame, &viewmodel, &state.theme, cols, rows);
    frame.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event};
    use crate::ui::strings::Locale;
    use crate::ui::Theme;

    fn send(state: &mut AppState, event: Event) {
        handle_event(state, &event).unwrap();
    }

    fn add(state: &mut AppState, name: &str, date: &str, age: &str) {
        send(state, Event::AddRecord);
        for c in name.chars() {
            send(state, Event::Char(c));
        }
        send(state, Event::NextField);
        for c in date.chars() {
            send(state, Event::Char(c));
        }
        send(state, Event::NextField);
        for c in age.chars() {
            send(state, Event::Char(c));
        }
        send(state, Event::SubmitForm);
    }

    #[test]
    fn table_lists_records_with_column_titles() {
        let mut state = AppState::new(Theme::default(), Locale::En);
        add(&mut state, "Ann", "09-01-2024", "30");

        let screen = render_to_string(&state, 24, 80);
        assert!(screen.contains("Records (1/1)"));
        assert!(screen.contains("NAME"));
        assert!(screen.contains("09-01-2024"));
        assert!(!screen.contains("No records yet"));
    }

    #[test]
    fn search_mode_draws_the_query_box() {
        let mut state = AppState::new(Theme::default(), Locale::En);
        add(&mut state, "Ann", "09-01-2024", "30");
        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('z'));

        let screen = render_to_string(&state, 24, 80);
        assert!(screen.contains("Search: z"));
        assert!(screen.contains("Nothing matches the search"));
    }

    #[test]
    fn russian_locale_localizes_overlays() {
        let mut state = AppState::new(Theme::default(), Locale::Ru);
        add(&mut state, "Анна", "09-01-2024", "30");
        send(&mut state, Event::DeleteSelected);

        let screen = render_to_string(&state, 24, 80);
        assert!(screen.contains("Вы уверены, что хотите удалить?"));
        assert!(screen.contains("[ Нет ]"));
    }
}
