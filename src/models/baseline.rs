//! Baseline distribution records
//!
//! A baseline is the previously recorded monthly total and per-category split
//! for a period, recovered from the distribution spreadsheet. It is the shape
//! that redistribution rescales to a new target total.

use std::collections::BTreeMap;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::period::Period;

/// The recorded total and per-category split for one period
///
/// The split keys are a subset of the configured category set; the sum of the
/// splits need not equal the total (the difference is the implicit residual).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineRecord {
    pub period: Period,
    pub total: Money,
    pub splits: HashMap<String, Money>,
}

impl BaselineRecord {
    /// Look up the baseline amount for a category, defaulting to zero
    pub fn split_for(&self, category: &str) -> Money {
        self.splits.get(category).copied().unwrap_or_default()
    }

    /// The portion of the total not attributed to any named category
    pub fn implied_residual(&self) -> Money {
        let allocated: Money = self.splits.values().copied().sum();
        self.total - allocated
    }
}

/// Per-period baseline records, ordered by period
///
/// A `BTreeMap` keeps iteration deterministic for identical source content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaselineTable {
    records: BTreeMap<Period, BaselineRecord>,
}

impl BaselineTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any earlier record for the same period
    pub fn insert(&mut self, record: BaselineRecord) {
        self.records.insert(record.period.clone(), record);
    }

    /// Look up the baseline for a period
    pub fn get(&self, period: &Period) -> Option<&BaselineRecord> {
        self.records.get(period)
    }

    /// Number of periods with a baseline
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any baseline was recovered
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in period order
    pub fn iter(&self) -> impl Iterator<Item = &BaselineRecord> {
        self.records.values()
    }
}
