//! Filtered and sorted projection of the record store.
//!
//! The view is a pure function of the store contents, the search query, and
//! the active [`SortDirective`]. [`compute_view`] is cheap enough to rerun on
//! every mutation, so nothing here is cached or diffed.

use crate::domain::Record;
use std::cmp::Ordering;

/// A sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    /// Lexicographic on the name, case-folded.
    Name,
    /// Chronological on the parsed date.
    Date,
    /// Numeric on the age.
    Age,
}

impl SortColumn {
    /// All columns in display order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Date, Self::Age];

    /// Compares two records by this column, ascending.
    #[must_use]
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            Self::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            Self::Date => match (a.date_value().ok(), b.date_value().ok()) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            Self::Age => a.age.cmp(&b.age),
        }
    }
}

/// Sort direction of the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// The active `(column, order)` pair, or absence of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortDirective {
    pub column: SortColumn,
    pub order: SortOrder,
}

impl SortDirective {
    /// Advances the sort state after the user activates `column`.
    ///
    /// Cycles `none -> ascending -> descending -> none` for the same column;
    /// switching to a different column starts at ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use zelltable::app::view::{SortColumn, SortDirective, SortOrder};
    ///
    /// let first = SortDirective::cycle(None, SortColumn::Age);
    /// assert_eq!(first.map(|d| d.order), Some(SortOrder::Ascending));
    /// let second = SortDirective::cycle(first, SortColumn::Age);
    /// assert_eq!(second.map(|d| d.order), Some(SortOrder::Descending));
    /// assert_eq!(SortDirective::cycle(second, SortColumn::Age), None);
    /// ```
    #[must_use]
    pub fn cycle(current: Option<Self>, column: SortColumn) -> Option<Self> {
        match current {
            Some(d) if d.column == column => match d.order {
                SortOrder::Ascending => Some(Self {
                    column,
                    order: SortOrder::Descending,
                }),
                SortOrder::Descending => None,
            },
            _ => Some(Self {
                column,
                order: SortOrder::Ascending,
            }),
        }
    }

    /// Compares two records under this directive.
    #[must_use]
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self.order {
            SortOrder::Ascending => self.column.compare(a, b),
            SortOrder::Descending => self.column.compare(b, a),
        }
    }
}

/// Returns `true` if any field of `record`, stringified, contains `query`
/// case-insensitively. An empty query matches every record.
#[must_use]
pub fn matches_query(record: &Record, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Computes the records to display, in display order.
///
/// Filtering keeps records matched by [`matches_query`]. Sorting is stable,
/// so records that compare equal keep their store order; with no directive
/// the store order is preserved entirely.
#[must_use]
pub fn compute_view<'a, I>(records: I, query: &str, sort: Option<SortDirective>) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut view: Vec<&Record> = records
        .into_iter()
        .filter(|record| matches_query(record, query))
        .collect();

    if let Some(directive) = sort {
        view.sort_by(|a, b| directive.compare(a, b));
    }

    view
}

/// Character ranges of `text` that match `query`, for highlighting.
///
/// Returns non-overlapping `(start, end)` character index ranges (exclusive
/// end), comparing characters case-insensitively. Empty when the query is
/// empty or absent from the text.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    fn fold(c: char) -> char {
        c.to_lowercase().next().unwrap_or(c)
    }

    let haystack: Vec<char> = text.chars().map(fold).collect();
    let needle: Vec<char> = query.chars().map(fold).collect();

    if needle.is_empty() || needle.len() > haystack.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RecordFields, RecordKey};
    use chrono::NaiveDate;

    fn record(key: &str, name: &str, date: (i32, u32, u32), age: i64) -> Record {
        let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        Record::new(RecordKey::from(key), RecordFields::new(name, date, age))
    }

    fn keys(view: &[&Record]) -> Vec<String> {
        view.iter().map(|r| r.key.to_string()).collect()
    }

    fn sample() -> Vec<Record> {
        vec![
            record("k1", "bob", (2024, 2, 1), 40),
            record("k2", "Ann", (2024, 1, 9), 30),
            record("k3", "carl", (2023, 12, 31), 30),
            record("k4", "ann", (2024, 1, 9), 25),
        ]
    }

    #[test]
    fn empty_query_keeps_store_order() {
        let records = sample();
        let view = compute_view(&records, "", None);
        assert_eq!(keys(&view), vec!["k1", "k2", "k3", "k4"]);
    }

    #[test]
    fn query_matches_any_field_case_insensitively() {
        let records = sample();

        assert_eq!(keys(&compute_view(&records, "ANN", None)), vec!["k2", "k4"]);
        assert_eq!(keys(&compute_view(&records, "01-2024", None)), vec!["k2", "k4"]);
        assert_eq!(keys(&compute_view(&records, "30", None)), vec!["k2", "k3"]);
        assert!(compute_view(&records, "k3", None).is_empty());
        assert!(compute_view(&records, "zzz", None).is_empty());
    }

    #[test]
    fn filter_agrees_with_field_containment() {
        let records = sample();
        for query in ["a", "2024", "1", "-", "Carl", "q", "12-2023"] {
            let view = compute_view(&records, query, None);
            for r in &records {
                let expected = r
                    .searchable_fields()
                    .iter()
                    .any(|f| f.to_lowercase().contains(&query.to_lowercase()));
                assert_eq!(view.iter().any(|v| v.key == r.key), expected, "query {query:?}");
            }
        }
    }

    #[test]
    fn date_sort_is_chronological_not_lexicographic() {
        let records = vec![
            record("feb", "x", (2024, 2, 1), 1),
            record("jan", "y", (2024, 1, 9), 1),
        ];
        assert!("01-02-2024" < "09-01-2024");

        let asc = Some(SortDirective {
            column: SortColumn::Date,
            order: SortOrder::Ascending,
        });
        assert_eq!(keys(&compute_view(&records, "", asc)), vec!["jan", "feb"]);
    }

    #[test]
    fn sorts_are_stable() {
        let records = sample();

        let by_age = Some(SortDirective {
            column: SortColumn::Age,
            order: SortOrder::Ascending,
        });
        assert_eq!(keys(&compute_view(&records, "", by_age)), vec!["k4", "k2", "k3", "k1"]);

        let by_date_desc = Some(SortDirective {
            column: SortColumn::Date,
            order: SortOrder::Descending,
        });
        assert_eq!(
            keys(&compute_view(&records, "", by_date_desc)),
            vec!["k1", "k2", "k4", "k3"]
        );
    }

    #[test]
    fn name_sort_folds_case_then_breaks_ties_by_raw_value() {
        let records = sample();
        let by_name = Some(SortDirective {
            column: SortColumn::Name,
            order: SortOrder::Ascending,
        });
        assert_eq!(keys(&compute_view(&records, "", by_name)), vec!["k2", "k4", "k1", "k3"]);
    }

    #[test]
    fn cycling_a_different_column_restarts_ascending() {
        let name_desc = Some(SortDirective {
            column: SortColumn::Name,
            order: SortOrder::Descending,
        });
        assert_eq!(
            SortDirective::cycle(name_desc, SortColumn::Age),
            Some(SortDirective {
                column: SortColumn::Age,
                order: SortOrder::Ascending,
            })
        );
    }

    #[test]
    fn match_ranges_finds_each_occurrence() {
        assert_eq!(match_ranges("Anna ann", "an"), vec![(0, 2), (5, 7)]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(match_ranges("Ann", "").is_empty());
        assert!(match_ranges("Ann", "Anne").is_empty());
    }
}
