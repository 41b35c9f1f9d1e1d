//! Business logic layer
//!
//! Services connect the models to the source/sink boundaries: baseline
//! extraction with caching, proportional redistribution, the project expense
//! calculator, salary pro-rata, and ledger recording.

pub mod baseline;
pub mod calculator;
pub mod distribution;
pub mod ledger;
pub mod salary;

pub use baseline::{BaselineExtractor, BaselineService};
pub use calculator::{breakdown, ExpenseBreakdown};
pub use distribution::Redistributor;
pub use ledger::LedgerService;
pub use salary::prorated_salary;
