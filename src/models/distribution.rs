//! Distribution results
//!
//! The output of rescaling a baseline (or of a manual allocation): one amount
//! per named category, in category-set order, plus the closing-balance line
//! that absorbs the unallocated remainder.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::period::Period;

/// One named category line in a distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: Money,
}

/// A computed distribution for a target total
///
/// Invariant: `distributed_total() + balance == target_total`, exactly. The
/// balance is always derived by subtraction from the target, so the identity
/// holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionResult {
    /// The period the distribution was computed for, when one applies
    pub period: Option<Period>,

    /// The authoritative total being distributed
    pub target_total: Money,

    /// Per-category amounts in category-set order
    pub splits: Vec<CategoryAmount>,

    /// The closing-balance line appended after the named categories
    pub balance: Money,

    /// Set in manual-allocation mode when the supplied amounts exceed the
    /// target total; holds the excess. Informational: the computation still
    /// produced the (negative) balance.
    pub over_allocation: Option<Money>,
}

impl DistributionResult {
    /// Sum of the named category amounts (excluding the balance line)
    pub fn distributed_total(&self) -> Money {
        self.splits.iter().map(|s| s.amount).sum()
    }

    /// Whether the supplied amounts exceeded the target (manual mode only)
    pub fn is_over_allocated(&self) -> bool {
        self.over_allocation.is_some()
    }

    /// Look up the amount for a category by exact name
    pub fn amount_for(&self, category: &str) -> Option<Money> {
        self.splits
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.amount)
    }
}
