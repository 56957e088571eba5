//! Edit session: the create/edit modal as a two-state machine.
//!
//! ```text
//!            open_create / open_edit(r)
//!   Closed ─────────────────────────────▶ Open { mode, form }
//!     ▲                                        │
//!     └──────── cancel / valid confirm ────────┘
//! ```
//!
//! An invalid confirm leaves the session open with the form's field errors
//! set; nothing reaches the store.

use super::form::FormState;
use crate::domain::{Record, RecordKey, ValidationErrors};
use crate::storage::RecordStore;
use crate::ui::strings::Strings;

/// Whether the open modal creates a record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    Create,
    /// Edits the record as it was when the modal opened.
    Edit(Record),
}

/// Result of a successful confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Committed {
    /// A new record was appended under this key.
    Added(RecordKey),
    /// The record with this key was replaced.
    Updated(RecordKey),
    /// The edited record no longer exists; the store was left unchanged.
    Vanished(RecordKey),
}

/// Modal edit session state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Closed,
    Open { mode: EditMode, form: FormState },
}

impl EditSession {
    /// Opens the modal in create mode with a blank form.
    pub fn open_create(&mut self) {
        tracing::debug!("edit session opened for create");
        *self = Self::Open {
            mode: EditMode::Create,
            form: FormState::empty(),
        };
    }

    /// Opens the modal in edit mode, pre-populated from `record`.
    pub fn open_edit(&mut self, record: &Record) {
        tracing::debug!(key = %record.key, "edit session opened for edit");
        *self = Self::Open {
            mode: EditMode::Edit(record.clone()),
            form: FormState::from_record(record),
        };
    }

    /// Closes the modal, discarding the form.
    pub fn cancel(&mut self) {
        if self.is_open() {
            tracing::debug!("edit session cancelled");
        }
        *self = Self::Closed;
    }

    /// Returns `true` while the modal is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// The record being edited, or `None` in create mode or when closed.
    #[must_use]
    pub const fn editing_record(&self) -> Option<&Record> {
        match self {
            Self::Open {
                mode: EditMode::Edit(record),
                ..
            } => Some(record),
            _ => None,
        }
    }

    /// The live form, when open.
    #[must_use]
    pub const fn form(&self) -> Option<&FormState> {
        match self {
            Self::Open { form, .. } => Some(form),
            Self::Closed => None,
        }
    }

    /// Mutable access to the live form, when open.
    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        match self {
            Self::Open { form, .. } => Some(form),
            Self::Closed => None,
        }
    }

    /// Validates the form and commits it to `store`.
    ///
    /// On success the session closes and the outcome says what changed.
    /// Returns `Ok(None)` when the session was already closed.
    ///
    /// # Errors
    ///
    /// Returns the per-field errors when validation fails. The session stays
    /// open with those errors shown and `store` is not touched.
    pub fn confirm(
        &mut self,
        store: &mut RecordStore,
        strings: &Strings,
    ) -> Result<Option<Committed>, ValidationErrors> {
        let Self::Open { mode, form } = self else {
            return Ok(None);
        };

        let fields = form.submit(strings)?;

        let committed = match mode {
            EditMode::Create => Committed::Added(store.add(fields)),
            EditMode::Edit(record) => {
                let key = record.key.clone();
                if store.update(&key, fields) {
                    Committed::Updated(key)
                } else {
                    Committed::Vanished(key)
                }
            }
        };

        tracing::debug!(outcome = ?committed, "edit session confirmed");
        *self = Self::Closed;
        Ok(Some(committed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Field, RecordFields};
    use crate::ui::strings::Locale;
    use chrono::NaiveDate;

    fn strings() -> &'static Strings {
        Locale::En.strings()
    }

    fn fill(session: &mut EditSession, name: &str, date: &str, age: &str) {
        let form = session.form_mut().unwrap();
        for (i, text) in [name, date, age].into_iter().enumerate() {
            while form.focus() != Field::ALL[i] {
                form.focus_next();
            }
            while form.backspace() {}
            for c in text.chars() {
                form.insert_char(c);
            }
        }
    }

    #[test]
    fn create_confirm_adds_and_closes() {
        let mut store = RecordStore::new();
        let mut session = EditSession::default();

        session.open_create();
        assert!(session.is_open());
        assert!(session.editing_record().is_none());

        fill(&mut session, "Ann", "09-01-2024", "30");
        let outcome = session.confirm(&mut store, strings()).unwrap();

        assert!(matches!(outcome, Some(Committed::Added(_))));
        assert_eq!(session, EditSession::Closed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn invalid_confirm_stays_open_and_leaves_store_alone() {
        let mut store = RecordStore::new();
        let mut session = EditSession::default();
        session.open_create();
        fill(&mut session, "Ann", "09-01-2024", "150");

        let errors = session.confirm(&mut store, strings()).unwrap_err();

        assert_eq!(errors.get(Field::Age), Some(strings().age_range));
        assert!(session.is_open());
        assert_eq!(session.form().unwrap().errors(), &errors);
        assert!(store.is_empty());
    }

    #[test]
    fn edit_confirm_updates_under_the_same_key() {
        let mut store = RecordStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        let key = store.add(RecordFields::new("Ann", date, 30));

        let mut session = EditSession::default();
        session.open_edit(store.get(&key).unwrap());
        fill(&mut session, "Ann", "09-01-2024", "31");

        let outcome = session.confirm(&mut store, strings()).unwrap();
        assert_eq!(outcome, Some(Committed::Updated(key.clone())));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&key).unwrap().age, 31);
    }

    #[test]
    fn editing_a_removed_record_changes_nothing() {
        let mut store = RecordStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        let key = store.add(RecordFields::new("Ann", date, 30));

        let mut session = EditSession::default();
        session.open_edit(store.get(&key).unwrap());
        store.remove(&key);

        let outcome = session.confirm(&mut store, strings()).unwrap();
        assert_eq!(outcome, Some(Committed::Vanished(key)));
        assert!(store.is_empty());
        assert!(!session.is_open());
    }

    #[test]
    fn cancel_discards_the_form() {
        let mut store = RecordStore::new();
        let mut session = EditSession::default();
        session.open_create();
        fill(&mut session, "Ann", "09-01-2024", "30");

        session.cancel();

        assert_eq!(session, EditSession::Closed);
        assert_eq!(session.confirm(&mut store, strings()), Ok(None));
        assert!(store.is_empty());
    }
}
