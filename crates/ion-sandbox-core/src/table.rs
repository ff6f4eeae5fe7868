#![forbid(unsafe_code)]

//! Tabular model for the violations report.

use serde::{Deserialize, Serialize};

use crate::outcome::Violation;

/// The rendered shape of a violations report: one header row plus one data
/// row per record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationsTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ViolationsTable {
    /// Build the table model from violation records.
    ///
    /// Returns `None` for an empty sequence (nothing is rendered).
    ///
    /// Column headers are the keys of the first record, in that record's key
    /// order. Every record contributes one row whose cells are emitted in the
    /// record's own key order; rows are NOT re-aligned to the header, so a
    /// record with a different key set or ordering than the first will
    /// misalign with the header row.
    #[must_use]
    pub fn from_records(records: &[Violation]) -> Option<Self> {
        let first = records.first()?;
        Some(Self {
            header: first.keys().map(str::to_owned).collect(),
            rows: records
                .iter()
                .map(|record| record.values().map(str::to_owned).collect())
                .collect(),
        })
    }

    /// Header cells in display order.
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows in record order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_record_yields_header_and_one_row() {
        let records = [Violation::new([("field", "age"), ("message", "must be positive")])];
        let table = ViolationsTable::from_records(&records).unwrap();
        assert_eq!(table.header(), ["field", "message"]);
        assert_eq!(table.rows(), [vec!["age".to_owned(), "must be positive".to_owned()]]);
    }

    #[test]
    fn empty_records_yield_no_table() {
        assert_eq!(ViolationsTable::from_records(&[]), None);
    }

    #[test]
    fn rows_follow_each_records_own_key_order() {
        // Heterogeneous records misalign with the header: the second row's
        // cells come out in ITS key order, under the FIRST record's headers.
        // Faithful to the reference behavior; not silently re-aligned.
        let records = [
            Violation::new([("field", "age"), ("message", "must be positive")]),
            Violation::new([("message", "required"), ("field", "lastName")]),
        ];
        let table = ViolationsTable::from_records(&records).unwrap();
        assert_eq!(table.header(), ["field", "message"]);
        assert_eq!(table.rows()[0], ["age", "must be positive"]);
        assert_eq!(table.rows()[1], ["required", "lastName"]);
    }

    #[test]
    fn later_record_with_extra_keys_widens_its_row_only() {
        let records = [
            Violation::new([("field", "age")]),
            Violation::new([("field", "name"), ("detail", "too long")]),
        ];
        let table = ViolationsTable::from_records(&records).unwrap();
        assert_eq!(table.header(), ["field"]);
        assert_eq!(table.rows()[0], ["age"]);
        assert_eq!(table.rows()[1], ["name", "too long"]);
    }
}
