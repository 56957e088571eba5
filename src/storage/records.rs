//! In-memory record store.
//!
//! [`RecordStore`] is the single source of truth for table rows. It keeps
//! records in insertion order and holds no derived state; the application
//! layer recomputes its filtered and sorted view after every mutation.

use crate::domain::{Record, RecordFields, RecordKey};

/// Ordered, in-memory collection of records.
///
/// Keys are unique across the store at all times: [`add`](Self::add) always
/// mints a fresh key, and [`update`](Self::update) never changes one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record built from `fields` under a newly generated key.
    ///
    /// Returns the new key. Fields are expected to be validated already.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use zelltable::domain::RecordFields;
    /// use zelltable::storage::RecordStore;
    ///
    /// let mut store = RecordStore::new();
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
    /// let key = store.add(RecordFields::new("Ann", date, 30));
    /// assert_eq!(store.get(&key).map(|r| r.age), Some(30));
    /// ```
    pub fn add(&mut self, fields: RecordFields) -> RecordKey {
        let mut key = RecordKey::generate();
        while self.contains(&key) {
            key = RecordKey::generate();
        }

        tracing::debug!(key = %key, name = %fields.name, "record added");
        self.records.push(Record::new(key.clone(), fields));
        key
    }

    /// Replaces the fields of the record with `key`, keeping its key and
    /// position.
    ///
    /// Returns `false` without changing anything when `key` is absent.
    pub fn update(&mut self, key: &RecordKey, fields: RecordFields) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| &r.key == key) else {
            tracing::debug!(key = %key, "update skipped, record absent");
            return false;
        };

        tracing::debug!(key = %key, name = %fields.name, "record updated");
        record.apply(fields);
        true
    }

    /// Deletes the record with `key`, returning it. No-op when absent.
    pub fn remove(&mut self, key: &RecordKey) -> Option<Record> {
        let index = self.records.iter().position(|r| &r.key == key)?;
        tracing::debug!(key = %key, "record removed");
        Some(self.records.remove(index))
    }

    /// Returns the record with `key`, if present.
    #[must_use]
    pub fn get(&self, key: &RecordKey) -> Option<&Record> {
        self.records.iter().find(|r| &r.key == key)
    }

    /// Returns `true` if a record with `key` is present.
    #[must_use]
    pub fn contains(&self, key: &RecordKey) -> bool {
        self.get(key).is_some()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over records in store order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Records in store order.
    #[must_use]
    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fields(name: &str, age: i64) -> RecordFields {
        RecordFields::new(name, NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(), age)
    }

    #[test]
    fn add_appends_in_order_with_unique_keys() {
        let mut store = RecordStore::new();
        let a = store.add(fields("Ann", 30));
        let b = store.add(fields("Bob", 40));

        assert_ne!(a, b);
        let names: Vec<&str> = store.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let mut store = RecordStore::new();
        let a = store.add(fields("Ann", 30));
        store.add(fields("Bob", 40));

        assert!(store.update(&a, fields("Anna", 31)));

        let first = &store.as_slice()[0];
        assert_eq!(first.key, a);
        assert_eq!(first.name, "Anna");
        assert_eq!(first.age, 31);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_of_absent_key_is_a_no_op() {
        let mut store = RecordStore::new();
        store.add(fields("Ann", 30));
        let before = store.clone();

        assert!(!store.update(&RecordKey::from("missing"), fields("Zed", 1)));
        assert_eq!(store, before);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = RecordStore::new();
        let a = store.add(fields("Ann", 30));

        assert_eq!(store.remove(&a).map(|r| r.name), Some("Ann".to_string()));
        assert!(store.remove(&a).is_none());
        assert!(store.is_empty());
    }
}
