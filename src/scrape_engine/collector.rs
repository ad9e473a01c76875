//! Deduplicating Collector: an append-only keyed record store.
//!
//! The system's only consistency guarantee lives here: re-insertion under an
//! already-present key is a no-op. The same record can legitimately show up
//! again if pagination ever re-visits a page, and that must neither duplicate
//! nor overwrite the stored entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::listing::{ListingSchema, RowCells};

/// Keyed collection of one listing's records, first-write-wins.
///
/// Each crawl allocates its own `RecordSet`, owns it for the duration of the
/// crawl, and returns it by value — nothing is shared across runs. A
/// `BTreeMap` keeps snapshot serialization deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet<R> {
    records: BTreeMap<String, R>,
}

impl<R> RecordSet<R> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Insert the record mapped from `row`, keyed by the schema's unique
    /// field, unless that key is already present.
    ///
    /// Duplicates of the same key are expected to be field-identical, so
    /// which instance wins is irrelevant; the first observed one is kept.
    pub fn insert_row(&mut self, row: &RowCells, schema: &ListingSchema<R>) {
        let key = row.field(schema.unique_field_index);
        if !self.records.contains_key(key) {
            self.records.insert(key.to_string(), (schema.map_row)(row));
        }
    }

    pub fn get(&self, key: &str) -> Option<&R> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

impl<R> Default for RecordSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::equipment_schema;

    fn row(cells: &[&str]) -> RowCells {
        RowCells::new(cells.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn first_write_wins_on_duplicate_key() {
        let schema = equipment_schema();
        let mut set = RecordSet::new();

        set.insert_row(&row(&["1", "first", "", "", "", "KEY"]), &schema);
        set.insert_row(&row(&["2", "second", "", "", "", "KEY"]), &schema);

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("KEY").unwrap().name, "first");
    }

    #[test]
    fn distinct_keys_accumulate() {
        let schema = equipment_schema();
        let mut set = RecordSet::new();

        set.insert_row(&row(&["1", "a", "", "", "", "K1"]), &schema);
        set.insert_row(&row(&["2", "b", "", "", "", "K2"]), &schema);

        assert_eq!(set.len(), 2);
        assert_eq!(set.keys().collect::<Vec<_>>(), vec!["K1", "K2"]);
    }

    #[test]
    fn short_row_keys_on_empty_string() {
        let schema = equipment_schema();
        let mut set = RecordSet::new();

        // unique_field_index is past the end: the key is "".
        set.insert_row(&row(&["1", "only"]), &schema);
        set.insert_row(&row(&["2", "again"]), &schema);

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("").unwrap().name, "only");
    }
}
