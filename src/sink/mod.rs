//! Ledger sink abstraction
//!
//! Expense entries are persisted through the `LedgerSink` trait: append one
//! row to a durable table. The column set is union-compatible across appends;
//! a row may introduce columns earlier rows never had.
//!
//! The sink contract is single-writer. Appends are atomic against crashes but
//! not against concurrent writers.

pub mod csv_ledger;

pub use csv_ledger::CsvLedgerSink;

use crate::error::CostsplitResult;

/// An ordered set of column/value pairs forming one ledger row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerRow {
    fields: Vec<(String, String)>,
}

impl LedgerRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column/value pair, preserving insertion order
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.push((column.into(), value.into()));
    }

    /// Builder-style variant of [`push`](Self::push)
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(column, value);
        self
    }

    /// Look up a value by column name
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }

    /// Column names in insertion order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(c, _)| c.as_str())
    }

    /// Number of columns in the row
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no columns
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An appendable persisted table
pub trait LedgerSink {
    /// Append one row to the ledger
    ///
    /// Columns the ledger has not seen before are introduced; historical rows
    /// are not back-filled and read as empty for the new columns.
    fn append(&self, row: &LedgerRow) -> CostsplitResult<()>;
}
