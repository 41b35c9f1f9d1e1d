//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the service layer.

pub mod allocate;
pub mod baseline;
pub mod calc;
pub mod distribute;
pub mod record;
pub mod salary;

pub use allocate::{handle_allocate_command, AllocateArgs};
pub use baseline::{handle_baseline_command, BaselineCommands};
pub use calc::{handle_calc_command, CalcArgs};
pub use distribute::{handle_distribute_command, DistributeArgs};
pub use record::{handle_record_command, RecordCommands};
pub use salary::{handle_salary_command, SalaryArgs};

use std::collections::HashMap;

use crate::error::{CostsplitError, CostsplitResult};
use crate::models::Money;

/// Parse a money argument, attributing failures to the named field
pub(crate) fn parse_money(field: &str, value: &str) -> CostsplitResult<Money> {
    Money::parse(value)
        .map_err(|e| CostsplitError::Validation(format!("Invalid {} amount: {}", field, e)))
}

/// Parse repeated "Category=Amount" arguments into a map
pub(crate) fn parse_amount_pairs(pairs: &[String]) -> CostsplitResult<HashMap<String, Money>> {
    let mut amounts = HashMap::new();
    for pair in pairs {
        let (category, value) = pair.split_once('=').ok_or_else(|| {
            CostsplitError::Validation(format!(
                "Expected CATEGORY=AMOUNT, got '{}'",
                pair
            ))
        })?;
        let amount = parse_money(category.trim(), value.trim())?;
        amounts.insert(category.trim().to_string(), amount);
    }
    Ok(amounts)
}
