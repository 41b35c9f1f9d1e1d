//! Baseline extraction service
//!
//! Parses the loosely-structured monthly distribution table into per-period
//! baseline records, and serves repeated lookups from a cache keyed by the
//! source content fingerprint.
//!
//! Extraction is tolerant by contract: a missing period column, a period
//! column with no total column to its right, or rows with unparseable cells
//! all degrade to "no baseline" rather than errors. Partial data is expected.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::settings::{Settings, TotalColumnRule};
use crate::error::CostsplitResult;
use crate::models::{BaselineRecord, BaselineTable, CategorySet, Money, Period};
use crate::source::{Table, TableSource};

/// Parses a `Table` into per-period baseline records
#[derive(Debug, Clone)]
pub struct BaselineExtractor {
    period_column: String,
    total_column: TotalColumnRule,
    categories: CategorySet,
}

impl BaselineExtractor {
    /// Create an extractor with explicit column configuration
    pub fn new(
        period_column: impl Into<String>,
        total_column: TotalColumnRule,
        categories: CategorySet,
    ) -> Self {
        Self {
            period_column: period_column.into(),
            total_column,
            categories,
        }
    }

    /// Create an extractor from user settings
    pub fn from_settings(settings: &Settings, categories: CategorySet) -> Self {
        Self::new(
            settings.period_column.clone(),
            settings.total_column.clone(),
            categories,
        )
    }

    /// The category set the extractor looks up columns for
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Extract all baseline records from a table
    ///
    /// Returns an empty table when the period column is absent or no total
    /// column can be resolved. Rows with missing/unparseable period or total
    /// are skipped silently.
    pub fn extract(&self, table: &Table) -> BaselineTable {
        let mut result = BaselineTable::new();

        let period_idx = match table.column_index(&self.period_column) {
            Some(idx) => idx,
            None => return result,
        };

        let total_idx = match &self.total_column {
            TotalColumnRule::Named(name) => table.column_index(name),
            TotalColumnRule::RightOfPeriod => {
                let idx = period_idx + 1;
                (idx < table.header.len()).then_some(idx)
            }
        };
        let total_idx = match total_idx {
            Some(idx) => idx,
            None => return result,
        };

        // Category columns are matched by exact trimmed name, case-sensitive
        let category_columns: Vec<(String, Option<usize>)> = self
            .categories
            .iter()
            .map(|name| (name.to_string(), table.column_index(name)))
            .collect();

        for row in 0..table.rows.len() {
            let period = match table.cell(row, period_idx).and_then(Period::canonicalize) {
                Some(period) => period,
                None => continue,
            };

            let total = match table.cell(row, total_idx).and_then(|v| Money::parse(v).ok()) {
                Some(total) => total,
                None => continue,
            };

            let mut splits = HashMap::with_capacity(category_columns.len());
            for (name, idx) in &category_columns {
                let amount = idx
                    .and_then(|i| table.cell(row, i))
                    .and_then(|v| Money::parse(v).ok())
                    .unwrap_or_default();
                splits.insert(name.clone(), amount);
            }

            result.insert(BaselineRecord {
                period,
                total,
                splits,
            });
        }

        result
    }
}

/// Serves baseline lookups from a memoized extraction
///
/// The cache is keyed by the source content fingerprint: identical content is
/// extracted once, any content change invalidates the cache. Time never does.
pub struct BaselineService<S> {
    source: S,
    extractor: BaselineExtractor,
    cache: RefCell<Option<(u64, BaselineTable)>>,
}

impl<S: TableSource> BaselineService<S> {
    /// Create a service over a source
    pub fn new(source: S, extractor: BaselineExtractor) -> Self {
        Self {
            source,
            extractor,
            cache: RefCell::new(None),
        }
    }

    /// Extract the baseline table, propagating source failures
    ///
    /// Use this when the caller needs to distinguish "the source is broken"
    /// from "the source has no data for this period".
    pub fn try_table(&self) -> CostsplitResult<BaselineTable> {
        let fingerprint = self.source.fingerprint()?;

        if let Some((cached_fp, cached)) = self.cache.borrow().as_ref() {
            if *cached_fp == fingerprint {
                return Ok(cached.clone());
            }
        }

        let table = self.source.read()?;
        let extracted = self.extractor.extract(&table);
        *self.cache.borrow_mut() = Some((fingerprint, extracted.clone()));
        Ok(extracted)
    }

    /// Extract the baseline table, degrading source failures to empty
    ///
    /// Matches the form layer's behavior: "data source broken" and "no data"
    /// both present as "no baseline available".
    pub fn table(&self) -> BaselineTable {
        self.try_table().unwrap_or_default()
    }

    /// Look up the baseline for one period
    pub fn baseline_for(&self, period: &Period) -> Option<BaselineRecord> {
        self.table().get(period).cloned()
    }

    /// The category set lookups are performed against
    pub fn categories(&self) -> &CategorySet {
        self.extractor.categories()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    fn categories() -> CategorySet {
        CategorySet::new(["Alpha", "Beta"]).unwrap()
    }

    fn extractor() -> BaselineExtractor {
        BaselineExtractor::new("Month", TotalColumnRule::RightOfPeriod, categories())
    }

    fn table(rows: Vec<Vec<&str>>) -> Table {
        Table::new(
            ["Month", "Total", "Alpha", "Beta"],
            rows.into_iter()
                .map(|r| r.into_iter().map(str::to_string).collect())
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_extracts_rows() {
        let table = table(vec![
            vec!["June 2025", "200", "100", "100"],
            vec!["2025-07-01", "300", "150", "50"],
        ]);
        let result = extractor().extract(&table);

        assert_eq!(result.len(), 2);
        let june = result.get(&Period::month(2025, 6)).unwrap();
        assert_eq!(june.total, Money::from_rupees(200));
        assert_eq!(june.split_for("Alpha"), Money::from_rupees(100));

        let july = result.get(&Period::month(2025, 7)).unwrap();
        assert_eq!(july.split_for("Beta"), Money::from_rupees(50));
    }

    #[test]
    fn test_missing_period_column_is_empty() {
        let table = Table::new(["Period", "Total"], vec![vec!["June 2025".into(), "200".into()]]);
        assert!(extractor().extract(&table).is_empty());
    }

    #[test]
    fn test_period_column_last_is_empty() {
        // Period column is the last column, so no total column exists
        let table = Table::new(["Alpha", "Month"], vec![vec!["100".into(), "June 2025".into()]]);
        assert!(extractor().extract(&table).is_empty());
    }

    #[test]
    fn test_named_total_column() {
        let extractor = BaselineExtractor::new(
            "Month",
            TotalColumnRule::Named("Grand Total".into()),
            categories(),
        );
        let table = Table::new(
            ["Month", "Alpha", "Grand Total"],
            vec![vec!["June 2025".into(), "80".into(), "200".into()]],
        );
        let result = extractor.extract(&table);
        let june = result.get(&Period::month(2025, 6)).unwrap();
        assert_eq!(june.total, Money::from_rupees(200));
        assert_eq!(june.split_for("Alpha"), Money::from_rupees(80));
    }

    #[test]
    fn test_bad_rows_are_skipped() {
        let table = table(vec![
            vec!["", "200", "1", "2"],               // no period
            vec!["June 2025", "", "1", "2"],         // no total
            vec!["July 2025", "abc", "1", "2"],      // unparseable total
            vec!["May 2025", "5.₹₹", "1", "2"],      // multibyte garbage total
            vec!["August 2025", "300", "150", "50"], // good
        ]);
        let result = extractor().extract(&table);
        assert_eq!(result.len(), 1);
        assert!(result.get(&Period::month(2025, 8)).is_some());
    }

    #[test]
    fn test_garbage_category_cell_defaults_to_zero() {
        let table = table(vec![vec!["June 2025", "200", "₹₹", "100"]]);
        let june = extractor()
            .extract(&table)
            .get(&Period::month(2025, 6))
            .cloned()
            .unwrap();
        assert_eq!(june.split_for("Alpha"), Money::zero());
        assert_eq!(june.split_for("Beta"), Money::from_rupees(100));
    }

    #[test]
    fn test_missing_category_column_defaults_to_zero() {
        let extractor = BaselineExtractor::new(
            "Month",
            TotalColumnRule::RightOfPeriod,
            CategorySet::new(["Alpha", "Gamma"]).unwrap(),
        );
        let table = table(vec![vec!["June 2025", "200", "100", "100"]]);
        let june = extractor
            .extract(&table)
            .get(&Period::month(2025, 6))
            .cloned()
            .unwrap();
        assert_eq!(june.split_for("Alpha"), Money::from_rupees(100));
        assert_eq!(june.split_for("Gamma"), Money::zero());
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let extractor = BaselineExtractor::new(
            "Month",
            TotalColumnRule::RightOfPeriod,
            CategorySet::new(["alpha"]).unwrap(),
        );
        let table = table(vec![vec!["June 2025", "200", "100", "100"]]);
        let june = extractor
            .extract(&table)
            .get(&Period::month(2025, 6))
            .cloned()
            .unwrap();
        // "Alpha" column does not match category "alpha"
        assert_eq!(june.split_for("alpha"), Money::zero());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let table = table(vec![
            vec!["June 2025", "200", "100", "100"],
            vec!["July 2025", "300", "150", "50"],
        ]);
        let first = extractor().extract(&table);
        let second = extractor().extract(&table);
        assert_eq!(first, second);
    }

    #[test]
    fn test_service_degrades_missing_source_to_empty() {
        let source = crate::source::CsvFileSource::new("/nonexistent/distribution.csv");
        let service = BaselineService::new(source, extractor());
        assert!(service.try_table().is_err());
        assert!(service.table().is_empty());
        assert!(service.baseline_for(&Period::month(2025, 6)).is_none());
    }

    #[test]
    fn test_service_caches_by_fingerprint() {
        use std::cell::Cell;

        struct CountingSource<'a> {
            inner: MemorySource,
            reads: &'a Cell<u32>,
        }

        impl TableSource for CountingSource<'_> {
            fn read(&self) -> CostsplitResult<Table> {
                self.reads.set(self.reads.get() + 1);
                self.inner.read()
            }
            fn fingerprint(&self) -> CostsplitResult<u64> {
                self.inner.fingerprint()
            }
        }

        let reads = Cell::new(0);
        let source = CountingSource {
            inner: MemorySource::new(table(vec![vec!["June 2025", "200", "100", "100"]])),
            reads: &reads,
        };
        let service = BaselineService::new(source, extractor());

        let first = service.table();
        let second = service.table();
        assert_eq!(first, second);
        assert_eq!(reads.get(), 1);
    }
}
