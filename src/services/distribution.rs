//! Proportional redistribution service
//!
//! Rescales a period's baseline split to a new target total, or computes the
//! balance for a manually supplied allocation. Both operations are pure: no
//! state is retained between calls.
//!
//! The balance line is always derived by subtracting the sum of the named
//! amounts from the target, so `sum(splits) + balance == target` holds
//! exactly even after per-category rounding.

use std::collections::HashMap;

use crate::error::{CostsplitError, CostsplitResult};
use crate::models::{
    BaselineRecord, CategoryAmount, CategorySet, DistributionResult, Money, Period,
};

/// Computes distributions over a fixed category set
#[derive(Debug, Clone)]
pub struct Redistributor {
    categories: CategorySet,
}

impl Redistributor {
    /// Create a redistributor for a category set
    pub fn new(categories: CategorySet) -> Self {
        Self { categories }
    }

    /// The category set amounts are produced for, in order
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Rescale a baseline to a target total
    ///
    /// Fails with `DistributionUnavailable` when no baseline exists for the
    /// period or its recorded total is not positive; the caller surfaces that
    /// as "cannot calculate", not a crash.
    pub fn redistribute(
        &self,
        period: &Period,
        target_total: Money,
        baseline: Option<&BaselineRecord>,
    ) -> CostsplitResult<DistributionResult> {
        let baseline = baseline.ok_or_else(|| CostsplitError::no_baseline(period.to_string()))?;
        if !baseline.total.is_positive() {
            return Err(CostsplitError::zero_baseline(period.to_string()));
        }

        let scale = target_total.to_f64() / baseline.total.to_f64();

        let splits: Vec<CategoryAmount> = self
            .categories
            .iter()
            .map(|category| CategoryAmount {
                category: category.to_string(),
                amount: baseline.split_for(category).scale(scale),
            })
            .collect();

        let distributed: Money = splits.iter().map(|s| s.amount).sum();
        let balance = target_total - distributed;

        Ok(DistributionResult {
            period: Some(period.clone()),
            target_total,
            splits,
            balance,
            over_allocation: None,
        })
    }

    /// Compute the balance for manually supplied per-category amounts
    ///
    /// No scaling is applied; the supplied amounts pass through unchanged.
    /// When they exceed the target, the over-allocation signal carries the
    /// excess and the balance goes negative rather than being clamped.
    /// Callers decide whether to block persistence on the signal.
    pub fn allocate(
        &self,
        period: Option<&Period>,
        target_total: Money,
        supplied: &HashMap<String, Money>,
    ) -> DistributionResult {
        let splits: Vec<CategoryAmount> = self
            .categories
            .iter()
            .map(|category| CategoryAmount {
                category: category.to_string(),
                amount: supplied.get(category).copied().unwrap_or_default(),
            })
            .collect();

        let distributed: Money = splits.iter().map(|s| s.amount).sum();
        let balance = target_total - distributed;

        let over_allocation = if distributed > target_total {
            Some(distributed - target_total)
        } else {
            None
        };

        DistributionResult {
            period: period.cloned(),
            target_total,
            splits,
            balance,
            over_allocation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redistributor() -> Redistributor {
        Redistributor::new(CategorySet::new(["A", "B"]).unwrap())
    }

    fn baseline(total: i64, a: i64, b: i64) -> BaselineRecord {
        BaselineRecord {
            period: Period::month(2025, 6),
            total: Money::from_rupees(total),
            splits: HashMap::from([
                ("A".to_string(), Money::from_rupees(a)),
                ("B".to_string(), Money::from_rupees(b)),
            ]),
        }
    }

    #[test]
    fn test_simple_rescale() {
        // Baseline 200 split evenly, target 300: scale 1.5
        let result = redistributor()
            .redistribute(
                &Period::month(2025, 6),
                Money::from_rupees(300),
                Some(&baseline(200, 100, 100)),
            )
            .unwrap();

        assert_eq!(result.amount_for("A"), Some(Money::from_rupees(150)));
        assert_eq!(result.amount_for("B"), Some(Money::from_rupees(150)));
        assert_eq!(result.balance, Money::zero());
    }

    #[test]
    fn test_residual_scales_into_balance() {
        // Baseline 200 with only 100 attributed: the implied residual doubles
        // along with everything else
        let result = redistributor()
            .redistribute(
                &Period::month(2025, 6),
                Money::from_rupees(400),
                Some(&baseline(200, 50, 50)),
            )
            .unwrap();

        assert_eq!(result.amount_for("A"), Some(Money::from_rupees(100)));
        assert_eq!(result.amount_for("B"), Some(Money::from_rupees(100)));
        assert_eq!(result.balance, Money::from_rupees(200));
    }

    #[test]
    fn test_sum_identity_holds_exactly() {
        // Awkward scale factor forces per-category rounding
        let result = redistributor()
            .redistribute(
                &Period::month(2025, 6),
                Money::from_paise(100_003),
                Some(&baseline(300, 100, 100)),
            )
            .unwrap();

        assert_eq!(
            result.distributed_total() + result.balance,
            result.target_total
        );
    }

    #[test]
    fn test_missing_baseline_is_unavailable() {
        let err = redistributor()
            .redistribute(&Period::month(2025, 6), Money::from_rupees(100), None)
            .unwrap_err();
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_zero_total_baseline_is_unavailable() {
        let err = redistributor()
            .redistribute(
                &Period::month(2025, 6),
                Money::from_rupees(100),
                Some(&baseline(0, 0, 0)),
            )
            .unwrap_err();
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_zero_target_gives_all_zeros() {
        let result = redistributor()
            .redistribute(
                &Period::month(2025, 6),
                Money::zero(),
                Some(&baseline(200, 100, 100)),
            )
            .unwrap();

        assert_eq!(result.amount_for("A"), Some(Money::zero()));
        assert_eq!(result.amount_for("B"), Some(Money::zero()));
        assert_eq!(result.balance, Money::zero());
    }

    #[test]
    fn test_negative_target_propagates_sign() {
        // Range validation is a caller concern; arithmetic just follows
        let result = redistributor()
            .redistribute(
                &Period::month(2025, 6),
                Money::from_rupees(-200),
                Some(&baseline(200, 100, 100)),
            )
            .unwrap();

        assert_eq!(result.amount_for("A"), Some(Money::from_rupees(-100)));
        assert_eq!(
            result.distributed_total() + result.balance,
            result.target_total
        );
    }

    #[test]
    fn test_category_missing_from_baseline_scales_to_zero() {
        let redistributor = Redistributor::new(CategorySet::new(["A", "B", "C"]).unwrap());
        let result = redistributor
            .redistribute(
                &Period::month(2025, 6),
                Money::from_rupees(400),
                Some(&baseline(200, 100, 100)),
            )
            .unwrap();
        assert_eq!(result.amount_for("C"), Some(Money::zero()));
    }

    #[test]
    fn test_manual_allocation_within_budget() {
        let supplied = HashMap::from([
            ("A".to_string(), Money::from_rupees(30)),
            ("B".to_string(), Money::from_rupees(50)),
        ]);
        let result = redistributor().allocate(None, Money::from_rupees(100), &supplied);

        assert_eq!(result.balance, Money::from_rupees(20));
        assert!(!result.is_over_allocated());
    }

    #[test]
    fn test_manual_over_allocation() {
        let supplied = HashMap::from([
            ("A".to_string(), Money::from_rupees(30)),
            ("B".to_string(), Money::from_rupees(80)),
        ]);
        let result = redistributor().allocate(None, Money::from_rupees(100), &supplied);

        // Amounts pass through unchanged; balance goes negative; the signal
        // carries the excess
        assert_eq!(result.amount_for("A"), Some(Money::from_rupees(30)));
        assert_eq!(result.amount_for("B"), Some(Money::from_rupees(80)));
        assert_eq!(result.balance, Money::from_rupees(-10));
        assert_eq!(result.over_allocation, Some(Money::from_rupees(10)));
    }

    #[test]
    fn test_manual_ignores_unknown_categories() {
        let supplied = HashMap::from([("Unknown".to_string(), Money::from_rupees(500))]);
        let result = redistributor().allocate(None, Money::from_rupees(100), &supplied);
        assert_eq!(result.distributed_total(), Money::zero());
        assert_eq!(result.balance, Money::from_rupees(100));
    }
}
