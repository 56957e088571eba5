//! Zelltable: an editable record table as a Zellij plugin.
//!
//! Zelltable keeps an in-memory list of records (name, date, age) and lets
//! the user:
//! - Filter rows with a case-insensitive substring search
//! - Sort by any column, cycling ascending, descending, and unsorted
//! - Add and edit records through a validated modal form
//! - Delete records after a confirmation prompt, with a short fade-out
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and actions                       │
//! │  - Edit session, removal queue, view computation    │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │
//! │ (ui/)         │   │ (storage/)    │
//! │ - Rendering   │   │ - RecordStore │
//! │ - Theming     │   │               │
//! │ - Strings     │   │               │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │  ← Core types
//! │  - Record, RecordKey, validation errors             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Observability (`observability/`) exports tracing spans to a rotating file
//! under the plugin data directory (`infrastructure/`).
//!
//! # Configuration
//!
//! Read from the Zellij plugin configuration block:
//!
//! ```kdl
//! plugin location="file:zelltable.wasm" {
//!     theme "catppuccin-latte"
//!     locale "ru"
//!     trace_level "debug"
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use zelltable::{handle_event, initialize, Config, Event};
//!
//! let mut raw = BTreeMap::new();
//! raw.insert("locale".to_string(), "ru".to_string());
//!
//! let mut state = initialize(&Config::from_zellij(&raw));
//! let (should_render, _actions) = handle_event(&mut state, &Event::AddRecord)?;
//! assert!(should_render);
//! # Ok::<(), zelltable::TableError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{Record, RecordKey, Result, TableError};
pub use ui::{Locale, Theme};

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
///
/// # Fields
///
/// - `theme_name`: Built-in theme name (e.g. `catppuccin-mocha`)
/// - `theme_file`: Path to a custom TOML theme; wins over `theme_name`
/// - `trace_level`: Tracing filter (e.g. `info`, `debug`, `zelltable=trace`)
/// - `locale`: Language of labels and validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub theme_name: Option<String>,
    pub theme_file: Option<String>,
    pub trace_level: Option<String>,
    pub locale: Locale,
}

impl Config {
    /// Parses configuration from Zellij's key-value map.
    ///
    /// Missing keys fall back to defaults. An unrecognized `locale` is logged
    /// and replaced by English.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let locale = config.get("locale").map_or_else(Locale::default, |tag| {
            Locale::from_tag(tag).unwrap_or_else(|| {
                let error = TableError::Config(format!("unknown locale '{tag}'"));
                tracing::warn!(error = %error, "using English");
                Locale::default()
            })
        });

        Self {
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
            locale,
        }
    }

    /// Resolves the configured theme, falling back to the default on errors.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|e| {
                tracing::warn!(theme_name = %theme_name, error = %e, "failed to load theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates the initial application state: an empty table with the
/// configured theme and locale.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(locale = ?config.locale, "initializing zelltable plugin");
    AppState::new(config.theme(), config.locale)
}
