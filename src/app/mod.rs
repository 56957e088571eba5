//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! domain/storage layers. It implements the event-driven flow that powers
//! the interactive table.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────────── Timer Events ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Field buffers, per-keystroke filtering, and validation
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and delete prompt types
//! - [`removal`]: Records waiting out their removal delay
//! - [`session`]: The create/edit modal state machine
//! - [`state`]: Central application state container and view model computation
//! - [`view`]: Filtering, sorting, and match highlighting
//!
//! # Example
//!
//! ```rust
//! use zelltable::app::{handle_event, AppState, Event};
//! use zelltable::ui::{strings::Locale, Theme};
//!
//! let mut state = AppState::new(Theme::default(), Locale::En);
//! let (_, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(actions.is_empty());
//! # Ok::<(), zelltable::TableError>(())
//! ```

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod removal;
pub mod session;
pub mod state;
pub mod view;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use state::AppState;
