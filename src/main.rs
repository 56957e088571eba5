//! Zellij plugin shim for zelltable.
//!
//! Translates Zellij events into [`zelltable::Event`]s, feeds them to the
//! handler, and executes the returned actions through the Zellij API. All
//! table logic lives in the library crate.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use plugin::State;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;
    use zelltable::app::view::SortColumn;
    use zelltable::{handle_event, Action, AppState, Config, Event, InputMode, SearchFocus};

    pub struct State {
        app: AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: zelltable::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            zelltable::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();
            tracing::debug!(locale = ?config.locale, theme = ?config.theme_name, "parsed configuration");

            self.app = zelltable::initialize(&config);

            request_permission(&[PermissionType::ChangeApplicationState]);
            subscribe(&[EventType::Key, EventType::Timer, EventType::PermissionRequestResult]);
            tracing::debug!("plugin load complete");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = Self::get_event_name(&event);
            let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::Timer(elapsed) => {
                    tracing::debug!(elapsed, "removal timer fired");
                    Event::RemovalTimerFired
                }
                zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                    if matches!(status, PermissionStatus::Denied) {
                        tracing::warn!("permissions denied, 'q' cannot hide the pane");
                    }
                    return false;
                }
                _ => return false,
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(action_count = actions.len(), should_render, "event handled");
                    for action in &actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::error!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            zelltable::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
            match event {
                zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
                zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
                zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                    "PermissionRequestResult".to_string()
                }
                _ => "Other".to_string(),
            }
        }

        /// Maps a key press to an event; the open overlay decides first,
        /// then the input mode.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::trace!(bare_key = ?key.bare_key, "key event");

            if self.app.prompt.is_some() {
                return Self::map_prompt_key(key);
            }
            if self.app.session.is_open() {
                return Self::map_form_key(key);
            }

            let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);
            match (self.app.input_mode, key.bare_key) {
                (_, BareKey::Char('n')) if ctrl => Some(Event::KeyDown),
                (_, BareKey::Char('p')) if ctrl => Some(Event::KeyUp),
                (_, BareKey::Down) => Some(Event::KeyDown),
                (_, BareKey::Up) => Some(Event::KeyUp),
                (InputMode::Search(_), BareKey::Esc) => Some(Event::ExitSearch),
                (InputMode::Normal, BareKey::Esc) => Some(Event::Escape),

                (InputMode::Search(SearchFocus::Typing), BareKey::Enter) => Some(Event::FocusResults),
                (InputMode::Search(SearchFocus::Typing), BareKey::Backspace) => Some(Event::Backspace),
                (InputMode::Search(SearchFocus::Typing), BareKey::Char(c)) => Some(Event::Char(c)),

                (InputMode::Search(SearchFocus::Navigating), BareKey::Char('/')) => {
                    Some(Event::FocusSearchBar)
                }
                (_, BareKey::Char('/')) => Some(Event::SearchMode),
                (InputMode::Normal, BareKey::Char('q')) => Some(Event::CloseFocus),
                (_, BareKey::Char('j')) => Some(Event::KeyDown),
                (_, BareKey::Char('k')) => Some(Event::KeyUp),
                (_, BareKey::Char('a')) => Some(Event::AddRecord),
                (_, BareKey::Char('e') | BareKey::Enter) => Some(Event::EditSelected),
                (_, BareKey::Char('d') | BareKey::Delete) => Some(Event::DeleteSelected),
                (_, BareKey::Char('1')) => Some(Event::SortBy(SortColumn::Name)),
                (_, BareKey::Char('2')) => Some(Event::SortBy(SortColumn::Date)),
                (_, BareKey::Char('3')) => Some(Event::SortBy(SortColumn::Age)),
                _ => None,
            }
        }

        fn map_prompt_key(key: &KeyWithModifier) -> Option<Event> {
            Some(match key.bare_key {
                BareKey::Char('y' | 'Y') => Event::ConfirmDelete,
                BareKey::Char('n' | 'N') | BareKey::Esc => Event::DeclineDelete,
                BareKey::Left | BareKey::Right | BareKey::Tab => Event::TogglePromptChoice,
                BareKey::Enter => Event::AcceptPrompt,
                _ => return None,
            })
        }

        fn map_form_key(key: &KeyWithModifier) -> Option<Event> {
            let shift = key.has_modifiers(&[KeyModifier::Shift]);
            Some(match key.bare_key {
                BareKey::Tab if shift => Event::PrevField,
                BareKey::Tab | BareKey::Down => Event::NextField,
                BareKey::Up => Event::PrevField,
                BareKey::Enter => Event::SubmitForm,
                BareKey::Esc => Event::CancelForm,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            })
        }

        #[tracing::instrument(level = "debug")]
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("hiding plugin pane");
                    hide_self();
                }
                Action::ScheduleRemoval { timer, delay } => {
                    tracing::debug!(timer = timer.get(), delay_ms = delay.as_millis(), "arming removal timer");
                    set_timeout(delay.as_secs_f64());
                }
            }
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("zelltable is a Zellij plugin; build it with `--target wasm32-wasip1` and load the .wasm from Zellij");
}
