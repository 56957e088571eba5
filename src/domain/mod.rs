//! Domain layer for the zelltable plugin.
//!
//! Core types independent of Zellij APIs and rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Record model, keys, and date helpers
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use zelltable::domain::{Record, RecordFields, RecordKey};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
//! let record = Record::new(RecordKey::generate(), RecordFields::new("Ann", date, 30));
//! assert_eq!(record.date, "09-01-2024");
//! ```

pub mod error;
pub mod record;

pub use error::{Field, Result, TableError, ValidationErrors};
pub use record::{Record, RecordFields, RecordKey};
