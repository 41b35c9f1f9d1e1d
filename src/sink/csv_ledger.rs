//! CSV ledger sink
//!
//! Implements the ledger append contract over a CSV file: read the whole
//! table if present, concatenate one row, write the whole table back. The
//! write goes through a temp file and an atomic rename so a failed append
//! leaves the previous ledger intact.
//!
//! Single-writer only: two concurrent appenders can still lose a row to each
//! other. That limitation is inherent to the whole-file contract.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{CostsplitError, CostsplitResult};

use super::{LedgerRow, LedgerSink};

/// A CSV file consumed as a `LedgerSink`
#[derive(Debug, Clone)]
pub struct CsvLedgerSink {
    path: PathBuf,
}

impl CsvLedgerSink {
    /// Create a sink writing to the given CSV file
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file path this sink writes to
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_existing(&self) -> CostsplitResult<(Vec<String>, Vec<Vec<String>>)> {
        if !self.path.exists() {
            return Ok((Vec::new(), Vec::new()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                CostsplitError::Sink(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| {
                CostsplitError::Sink(format!("Failed to read {}: {}", self.path.display(), e))
            })?;
            records.push(record.iter().map(str::to_string).collect::<Vec<String>>());
        }

        let mut iter = records.into_iter();
        let header = iter.next().unwrap_or_default();
        Ok((header, iter.collect()))
    }

    fn write_all(&self, header: &[String], rows: &[Vec<String>]) -> CostsplitResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CostsplitError::Sink(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Temp file in the same directory so the rename stays atomic
        let temp_path = self.path.with_extension("csv.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| CostsplitError::Sink(format!("Failed to create temp file: {}", e)))?;
        let mut writer = csv::Writer::from_writer(BufWriter::new(file));

        writer
            .write_record(header)
            .map_err(|e| CostsplitError::Sink(format!("Failed to write header: {}", e)))?;
        for row in rows {
            writer
                .write_record(row)
                .map_err(|e| CostsplitError::Sink(format!("Failed to write row: {}", e)))?;
        }

        let mut inner = writer
            .into_inner()
            .map_err(|e| CostsplitError::Sink(format!("Failed to flush ledger: {}", e)))?;
        inner
            .flush()
            .map_err(|e| CostsplitError::Sink(format!("Failed to flush ledger: {}", e)))?;
        inner
            .get_ref()
            .sync_all()
            .map_err(|e| CostsplitError::Sink(format!("Failed to sync ledger: {}", e)))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            CostsplitError::Sink(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}

impl LedgerSink for CsvLedgerSink {
    fn append(&self, row: &LedgerRow) -> CostsplitResult<()> {
        if row.is_empty() {
            return Err(CostsplitError::Sink("Refusing to append an empty row".into()));
        }

        let (mut header, mut rows) = self.read_existing()?;

        // Union the column sets: new columns join at the end of the header and
        // historical rows read as empty for them (no back-fill).
        for column in row.columns() {
            if !header.iter().any(|h| h == column) {
                header.push(column.to_string());
            }
        }
        for existing in rows.iter_mut() {
            existing.resize(header.len(), String::new());
        }

        let new_row: Vec<String> = header
            .iter()
            .map(|column| row.get(column).unwrap_or("").to_string())
            .collect();
        rows.push(new_row);

        self.write_all(&header, &rows)
    }
}
