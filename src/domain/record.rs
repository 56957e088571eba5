//! Record domain model.
//!
//! A [`Record`] is one row of the table: a display name, a calendar date, and
//! an age, identified by an immutable [`RecordKey`]. Dates are stored in their
//! canonical `DD-MM-YYYY` text form so that search matches what the user sees;
//! [`parse_date`] and [`format_date`] convert between that form and
//! [`chrono::NaiveDate`].

use super::error::{Result, TableError};
use chrono::NaiveDate;
use std::fmt;

/// `chrono` format string for the canonical `DD-MM-YYYY` representation.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Inclusive lower bound for [`Record::age`].
pub const MIN_AGE: i64 = 0;

/// Inclusive upper bound for [`Record::age`].
pub const MAX_AGE: i64 = 100;

/// Unique, immutable identifier of a record.
///
/// Keys are random v4 UUIDs in simple (hyphen-free) form. They are generated
/// once when a record is created and carried unchanged through every edit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey(String);

impl RecordKey {
    /// Generates a fresh key.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The editable part of a record, as produced by a validated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    pub name: String,
    /// Canonical `DD-MM-YYYY` date.
    pub date: String,
    pub age: i64,
}

impl RecordFields {
    /// Builds fields from a structured date, formatting it canonically.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use zelltable::domain::RecordFields;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
    /// let fields = RecordFields::new("Ann", date, 30);
    /// assert_eq!(fields.date, "09-01-2024");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, date: NaiveDate, age: i64) -> Self {
        Self {
            name: name.into(),
            date: format_date(date),
            age,
        }
    }
}

/// One row of table data.
///
/// # Fields
///
/// - `key`: unique identifier, never regenerated
/// - `name`: non-empty, digit-free display name
/// - `date`: canonical `DD-MM-YYYY` string
/// - `age`: integer in `0..=100`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: RecordKey,
    pub name: String,
    pub date: String,
    pub age: i64,
}

impl Record {
    /// Creates a record from validated fields under the given key.
    #[must_use]
    pub fn new(key: RecordKey, fields: RecordFields) -> Self {
        Self {
            key,
            name: fields.name,
            date: fields.date,
            age: fields.age,
        }
    }

    /// Replaces every editable field, keeping the key.
    pub fn apply(&mut self, fields: RecordFields) {
        self.name = fields.name;
        self.date = fields.date;
        self.age = fields.age;
    }

    /// Parses the stored date into a structured value.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidDate`] if the stored text is not a valid
    /// `DD-MM-YYYY` date. Records built through the form never hit this.
    pub fn date_value(&self) -> Result<NaiveDate> {
        parse_date(&self.date)
    }

    /// String representations of the user-visible fields, in the order the
    /// search filter inspects them. The key is an opaque UUID and is left
    /// out.
    #[must_use]
    pub fn searchable_fields(&self) -> [String; 3] {
        [
            self.name.clone(),
            self.date.clone(),
            self.age.to_string(),
        ]
    }
}

/// Parses a `DD-MM-YYYY` string.
///
/// # Errors
///
/// Returns [`TableError::InvalidDate`] when `input` is not a real calendar
/// date in that format. The year must have exactly four digits; day and
/// month may have one.
///
/// # Examples
///
/// ```
/// use zelltable::domain::record::parse_date;
///
/// let date = parse_date("09-01-2024").unwrap();
/// assert_eq!(date.to_string(), "2024-01-09");
/// assert!(parse_date("31-02-2024").is_err());
/// assert!(parse_date("09-01-24").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let invalid = || TableError::InvalidDate {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    // chrono's %Y also takes short years
    let year = trimmed.rsplit('-').next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())
}

/// Formats a date as `DD-MM-YYYY`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Removes ASCII digits from a name.
///
/// Applied on every keystroke in the name field, so digits are filtered out
/// rather than rejected.
///
/// # Examples
///
/// ```
/// use zelltable::domain::record::strip_digits;
///
/// assert_eq!(strip_digits("A1n2n"), "Ann");
/// ```
#[must_use]
pub fn strip_digits(input: &str) -> String {
    input.chars().filter(|c| !c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn generated_keys_are_distinct() {
        let keys: std::collections::HashSet<RecordKey> =
            (0..1000).map(|_| RecordKey::generate()).collect();
        assert_eq!(keys.len(), 1000);
    }

    #[test]
    fn date_round_trips_through_canonical_form() {
        let date = ymd(2024, 1, 9);
        assert_eq!(format_date(date), "09-01-2024");
        assert_eq!(parse_date("09-01-2024").unwrap(), date);
    }

    #[test]
    fn parse_date_rejects_other_layouts() {
        assert!(parse_date("2024-01-09").is_err());
        assert!(parse_date("").is_err());
        assert!(matches!(
            parse_date("32-01-2024"),
            Err(TableError::InvalidDate { ref input }) if input == "32-01-2024"
        ));
    }

    #[test]
    fn parse_date_needs_a_four_digit_year() {
        assert!(parse_date("09-01-24").is_err());
        assert!(parse_date("1-1-202").is_err());
        assert!(parse_date("09-01-02024").is_err());
        assert_eq!(parse_date("9-1-2024").unwrap(), ymd(2024, 1, 9));
    }

    #[test]
    fn apply_keeps_key() {
        let key = RecordKey::from("k1");
        let mut record = Record::new(key.clone(), RecordFields::new("Ann", ymd(2024, 1, 9), 30));
        record.apply(RecordFields::new("Bob", ymd(2023, 5, 1), 31));

        assert_eq!(record.key, key);
        assert_eq!(record.name, "Bob");
        assert_eq!(record.date, "01-05-2023");
        assert_eq!(record.age, 31);
        assert_eq!(record.date_value().unwrap(), ymd(2023, 5, 1));
    }

    #[test]
    fn strip_digits_keeps_non_ascii_letters() {
        assert_eq!(strip_digits("Анна 2"), "Анна ");
        assert_eq!(strip_digits("123"), "");
    }
}
