//! Core data models for costsplit
//!
//! This module contains the data structures that represent the distribution
//! domain: money, periods, category sets, baseline records, distribution
//! results, and ledger entries.

pub mod baseline;
pub mod category;
pub mod distribution;
pub mod entry;
pub mod money;
pub mod period;

pub use baseline::{BaselineRecord, BaselineTable};
pub use category::CategorySet;
pub use distribution::{CategoryAmount, DistributionResult};
pub use entry::{CsrExpenseEntry, HrExpenseEntry, InternshipEntry};
pub use money::Money;
pub use period::Period;
