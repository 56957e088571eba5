//! Record form state and validation.
//!
//! [`FormState`] holds the text the user has typed into the modal's three
//! fields, which field has focus, and the per-field messages from the last
//! failed submission. Input is filtered as it arrives: the name field drops
//! digits, the date field takes only `DD-MM-YYYY` characters, and the age
//! field takes only an optionally signed integer.

use crate::domain::record::{self, MAX_AGE, MIN_AGE};
use crate::domain::{Field, Record, RecordFields, ValidationErrors};
use crate::ui::strings::Strings;
use chrono::NaiveDate;

/// Longest text the date field accepts (`DD-MM-YYYY`).
const DATE_INPUT_LEN: usize = 10;

/// Longest text the age field accepts (`-100`).
const AGE_INPUT_LEN: usize = 4;

/// Live values and validation state of the record form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    name: String,
    date: String,
    age: String,
    focus: Field,
    errors: ValidationErrors,
}

impl Default for FormState {
    fn default() -> Self {
        Self::empty()
    }
}

impl FormState {
    /// A blank form with focus on the name field.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            date: String::new(),
            age: String::new(),
            focus: Field::Name,
            errors: ValidationErrors::new(),
        }
    }

    /// A form pre-populated from `record`.
    ///
    /// The stored date string goes through its structured [`NaiveDate`] form,
    /// so [`date_value`](Self::date_value) reproduces the original date.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let date = record
            .date_value()
            .map_or_else(|_| record.date.clone(), record::format_date);

        Self {
            name: record::strip_digits(&record.name),
            date,
            age: record.age.to_string(),
            focus: Field::Name,
            errors: ValidationErrors::new(),
        }
    }

    /// Current name text.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current date text.
    #[must_use]
    pub fn date_text(&self) -> &str {
        &self.date
    }

    /// Current age text.
    #[must_use]
    pub fn age_text(&self) -> &str {
        &self.age
    }

    /// The date field as a structured value, if it currently parses.
    #[must_use]
    pub fn date_value(&self) -> Option<NaiveDate> {
        record::parse_date(&self.date).ok()
    }

    /// The age field as a number, if it currently parses.
    #[must_use]
    pub fn age_value(&self) -> Option<i64> {
        self.age.trim().parse().ok()
    }

    /// Field that receives typed characters.
    #[must_use]
    pub const fn focus(&self) -> Field {
        self.focus
    }

    /// Messages from the last failed submission.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Moves focus to the next field, wrapping after age.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Field::Name => Field::Date,
            Field::Date => Field::Age,
            Field::Age => Field::Name,
        };
    }

    /// Moves focus to the previous field, wrapping before name.
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Field::Name => Field::Age,
            Field::Date => Field::Name,
            Field::Age => Field::Date,
        };
    }

    /// Replaces the name text, dropping any digits.
    pub fn set_name(&mut self, value: &str) {
        self.name = record::strip_digits(value);
        self.errors.clear(Field::Name);
    }

    /// Types `c` into the focused field.
    ///
    /// Characters the field does not accept are dropped. Returns `true` if
    /// the field changed.
    pub fn insert_char(&mut self, c: char) -> bool {
        let accepted = match self.focus {
            Field::Name => !c.is_ascii_digit() && !c.is_control(),
            Field::Date => {
                (c.is_ascii_digit() || c == '-') && self.date.chars().count() < DATE_INPUT_LEN
            }
            Field::Age => {
                (c.is_ascii_digit() || (c == '-' && self.age.is_empty()))
                    && self.age.chars().count() < AGE_INPUT_LEN
            }
        };

        if !accepted {
            tracing::trace!(field = %self.focus, char = %c, "input filtered");
            return false;
        }

        self.field_mut(self.focus).push(c);
        self.errors.clear(self.focus);
        true
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) -> bool {
        let removed = self.field_mut(self.focus).pop().is_some();
        if removed {
            self.errors.clear(self.focus);
        }
        removed
    }

    /// Checks every field and returns the values ready for the store.
    ///
    /// # Errors
    ///
    /// Returns one localized message per invalid field:
    /// - name empty or whitespace only
    /// - date missing or not a real `DD-MM-YYYY` date
    /// - age missing, not an integer, or outside `0..=100`
    pub fn validate(&self, strings: &Strings) -> Result<RecordFields, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, strings.name_required);
        }

        let date = if self.date.trim().is_empty() {
            errors.insert(Field::Date, strings.date_required);
            None
        } else {
            let parsed = self.date_value();
            if parsed.is_none() {
                errors.insert(Field::Date, strings.date_invalid);
            }
            parsed
        };

        let age_text = self.age.trim();
        let age = if age_text.is_empty() || age_text == "-" {
            errors.insert(Field::Age, strings.age_required);
            None
        } else {
            match age_text.parse::<i64>() {
                Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => Some(age),
                _ => {
                    errors.insert(Field::Age, strings.age_range);
                    None
                }
            }
        };

        match (date, age) {
            (Some(date), Some(age)) if errors.is_empty() => {
                Ok(RecordFields::new(self.name.as_str(), date, age))
            }
            _ => Err(errors),
        }
    }

    /// Validates and, on failure, keeps the messages for display.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn submit(&mut self, strings: &Strings) -> Result<RecordFields, ValidationErrors> {
        match self.validate(strings) {
            Ok(fields) => {
                self.errors = ValidationErrors::new();
                Ok(fields)
            }
            Err(errors) => {
                tracing::debug!(
                    invalid_fields = errors.len(),
                    "form submission rejected"
                );
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Date => &mut self.date,
            Field::Age => &mut self.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordKey;
    use crate::ui::strings::Locale;

    fn strings() -> &'static Strings {
        Locale::En.strings()
    }

    fn type_str(form: &mut FormState, text: &str) {
        for c in text.chars() {
            form.insert_char(c);
        }
    }

    fn filled(name: &str, date: &str, age: &str) -> FormState {
        let mut form = FormState::empty();
        type_str(&mut form, name);
        form.focus_next();
        type_str(&mut form, date);
        form.focus_next();
        type_str(&mut form, age);
        form
    }

    #[test]
    fn typing_digits_into_name_filters_them() {
        let mut form = FormState::empty();
        type_str(&mut form, "A1n2n");
        assert_eq!(form.name(), "Ann");

        form.set_name("Bo7b");
        assert_eq!(form.name(), "Bob");
    }

    #[test]
    fn date_and_age_fields_only_take_their_characters() {
        let mut form = FormState::empty();
        form.focus_next();
        type_str(&mut form, "09/01-2024xx99");
        assert_eq!(form.date_text(), "0901-20249");

        form.focus_next();
        type_str(&mut form, "a-3-0");
        assert_eq!(form.age_text(), "-30");
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut form = FormState::empty();
        form.focus_prev();
        assert_eq!(form.focus(), Field::Age);
        form.focus_next();
        assert_eq!(form.focus(), Field::Name);
    }

    #[test]
    fn valid_form_produces_canonical_fields() {
        let form = filled("Ann", "09-01-2024", "30");
        let fields = form.validate(strings()).unwrap();

        assert_eq!(fields.name, "Ann");
        assert_eq!(fields.date, "09-01-2024");
        assert_eq!(fields.age, 30);
    }

    #[test]
    fn age_bounds_are_inclusive() {
        assert!(filled("Ann", "09-01-2024", "0").validate(strings()).is_ok());
        assert!(filled("Ann", "09-01-2024", "100").validate(strings()).is_ok());

        let errors = filled("Ann", "09-01-2024", "150").validate(strings()).unwrap_err();
        assert_eq!(errors.get(Field::Age), Some(strings().age_range));

        let errors = filled("Ann", "09-01-2024", "-1").validate(strings()).unwrap_err();
        assert_eq!(errors.get(Field::Age), Some(strings().age_range));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = FormState::empty().validate(strings()).unwrap_err();

        assert_eq!(errors.get(Field::Name), Some(strings().name_required));
        assert_eq!(errors.get(Field::Date), Some(strings().date_required));
        assert_eq!(errors.get(Field::Age), Some(strings().age_required));
    }

    #[test]
    fn whitespace_name_and_impossible_date_are_rejected() {
        let errors = filled("   ", "31-02-2024", "30").validate(strings()).unwrap_err();

        assert_eq!(errors.get(Field::Name), Some(strings().name_required));
        assert_eq!(errors.get(Field::Date), Some(strings().date_invalid));
        assert_eq!(errors.get(Field::Age), None);
    }

    #[test]
    fn two_digit_year_is_not_a_valid_date() {
        let errors = filled("", "09-01-24", "30").validate(strings()).unwrap_err();

        assert_eq!(errors.get(Field::Name), Some(strings().name_required));
        assert_eq!(errors.get(Field::Date), Some(strings().date_invalid));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn single_digit_day_and_month_are_normalised() {
        let fields = filled("Ann", "9-1-2024", "30").validate(strings()).unwrap();
        assert_eq!(fields.date, "09-01-2024");
    }

    #[test]
    fn name_is_stored_as_typed() {
        let fields = filled(" Ann ", "09-01-2024", "30").validate(strings()).unwrap();
        assert_eq!(fields.name, " Ann ");
    }

    #[test]
    fn submit_keeps_errors_until_the_field_is_edited() {
        let mut form = filled("Ann", "09-01-2024", "150");
        assert!(form.submit(strings()).is_err());
        assert!(form.errors().get(Field::Age).is_some());

        assert!(form.backspace());
        assert!(form.errors().is_empty());
        assert_eq!(form.age_text(), "15");
        assert!(form.submit(strings()).is_ok());
    }

    #[test]
    fn from_record_round_trips_the_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        let record = Record::new(RecordKey::from("k"), RecordFields::new("Ann", date, 30));

        let form = FormState::from_record(&record);
        assert_eq!(form.name(), "Ann");
        assert_eq!(form.date_value(), Some(date));
        assert_eq!(form.age_value(), Some(30));
        assert_eq!(form.focus(), Field::Name);
    }

    #[test]
    fn russian_messages_come_from_the_locale() {
        let ru = Locale::Ru.strings();
        let errors = FormState::empty().validate(ru).unwrap_err();
        assert_eq!(errors.get(Field::Name), Some("Введите имя"));
    }
}
