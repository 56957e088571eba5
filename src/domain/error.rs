//! Error types for the zelltable plugin.
//!
//! This module defines the crate-wide error type [`TableError`], the per-field
//! [`ValidationErrors`] produced by the record form, and a [`Result`] alias.
//! All errors derive their `Error` implementation through `thiserror`.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// The main error type for zelltable operations.
///
/// Table mutations themselves cannot fail; the variants here cover the
/// surrounding concerns (theme loading, configuration, date parsing) and the
/// one user-facing failure, form validation.
///
/// # Examples
///
/// ```
/// use zelltable::domain::TableError;
///
/// fn load_config() -> Result<(), TableError> {
///     Err(TableError::Config("unknown locale \"de\"".to_string()))
/// }
/// assert!(load_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum TableError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A stored or typed date is not a valid `DD-MM-YYYY` value.
    #[error("Invalid date {input:?}: expected DD-MM-YYYY")]
    InvalidDate {
        /// The text that failed to parse.
        input: String,
    },

    /// The record form was submitted with invalid fields.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

/// A form field that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Record name.
    Name,
    /// Record date.
    Date,
    /// Record age.
    Age,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Date, Self::Age];

    /// Lowercase identifier used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
            Self::Age => "age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation failures from a form submission.
///
/// Holds at most one message per field. The messages are already localized;
/// the form renders each one under its field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("form validation failed for {} field(s)", .messages.len())]
pub struct ValidationErrors {
    messages: BTreeMap<Field, String>,
}

impl ValidationErrors {
    /// Creates an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`, replacing any previous one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    /// Clears the message for `field`, if any.
    pub fn clear(&mut self, field: Field) {
        self.messages.remove(&field);
    }

    /// Returns the message for `field`, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    /// Returns `true` when no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of fields with an error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Iterates over `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// A specialized `Result` type for zelltable operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_keep_one_message_per_field() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Age, "first");
        errors.insert(Field::Age, "second");
        errors.insert(Field::Name, "name");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Age), Some("second"));

        let order: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(order, vec![Field::Name, Field::Age]);

        errors.clear(Field::Name);
        assert_eq!(errors.get(Field::Name), None);
    }

    #[test]
    fn validation_errors_convert_into_table_error() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Date, "Select a date");

        let err: TableError = errors.into();
        assert!(matches!(err, TableError::Validation(ref v) if v.len() == 1));
        assert_eq!(err.to_string(), "form validation failed for 1 field(s)");
    }
}
