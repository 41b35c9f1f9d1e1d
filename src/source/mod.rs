//! Tabular data source abstraction
//!
//! The distribution spreadsheet is consumed through the `TableSource` trait:
//! a read of string cells plus a content fingerprint used for cache
//! invalidation. The baseline cache is keyed by fingerprint, never by
//! wall-clock time.

pub mod csv_file;
pub mod memory;

pub use csv_file::CsvFileSource;
pub use memory::MemorySource;

use crate::error::CostsplitResult;

/// A table of string cells with a single header row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names, as they appear in the source (untrimmed)
    pub header: Vec<String>,
    /// Data rows; rows may be shorter than the header
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from a header and rows
    pub fn new(
        header: impl IntoIterator<Item = impl Into<String>>,
        rows: impl IntoIterator<Item = Vec<String>>,
    ) -> Self {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: rows.into_iter().collect(),
        }
    }

    /// Find a column index by exact match on the trimmed column name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.header.iter().position(|h| h.trim() == wanted)
    }

    /// Get a cell by row and column, if present
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

/// A readable table with a content identity
pub trait TableSource {
    /// Read the table
    fn read(&self) -> CostsplitResult<Table>;

    /// A fingerprint of the source content
    ///
    /// Two reads with identical content must fingerprint identically; any
    /// content change must change the fingerprint.
    fn fingerprint(&self) -> CostsplitResult<u64>;
}

pub(crate) fn hash_bytes(bytes: &[u8]) -> u64 {
    use std::hash::{Hash, Hasher};
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    bytes.hash(&mut hasher);
    hasher.finish()
}
