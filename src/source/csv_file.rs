//! CSV file table source
//!
//! Reads the distribution spreadsheet from a CSV export. The true header is
//! typically not the first physical row, so a configurable number of leading
//! rows is skipped before the header (the source files carry a one-row title
//! banner above the real header).

use std::path::{Path, PathBuf};

use crate::error::{CostsplitError, CostsplitResult};

use super::{hash_bytes, Table, TableSource};

/// A CSV file consumed as a `TableSource`
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    /// Physical rows skipped before the header row
    skip_rows: usize,
}

impl CsvFileSource {
    /// Create a source with the default header offset of 1
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            skip_rows: 1,
        }
    }

    /// Override the number of rows skipped before the header
    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }

    /// The file path this source reads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_bytes(&self) -> CostsplitResult<Vec<u8>> {
        std::fs::read(&self.path).map_err(|e| {
            CostsplitError::Source(format!("Failed to read {}: {}", self.path.display(), e))
        })
    }
}

impl TableSource for CsvFileSource {
    fn read(&self) -> CostsplitResult<Table> {
        let bytes = self.read_bytes()?;

        // Rows vary in width around the title banner, so the reader must be
        // flexible and header handling is done manually.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes.as_slice());

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| {
                CostsplitError::Source(format!("Failed to parse {}: {}", self.path.display(), e))
            })?;
            records.push(record.iter().map(str::to_string).collect::<Vec<String>>());
        }

        let mut remaining = records.into_iter().skip(self.skip_rows);
        let header = match remaining.next() {
            Some(header) => header,
            None => return Ok(Table::default()),
        };

        Ok(Table {
            header,
            rows: remaining.collect(),
        })
    }

    fn fingerprint(&self) -> CostsplitResult<u64> {
        Ok(hash_bytes(&self.read_bytes()?))
    }
}
