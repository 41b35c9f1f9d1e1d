//! Manual allocation command
//!
//! Distributes a budget across projects from amounts supplied on the command
//! line; the balance line absorbs whatever is left. Over-allocation is a
//! warning here, not an error. Only persistence is blocked on it.

use clap::Args;

use crate::config::{ReferenceData, Settings};
use crate::display::render_distribution;
use crate::error::{CostsplitError, CostsplitResult};
use crate::models::Period;
use crate::services::Redistributor;

/// Arguments for the `allocate` command
#[derive(Args)]
pub struct AllocateArgs {
    /// Budget total to allocate against
    pub total: String,

    /// Per-project amount as CATEGORY=AMOUNT (repeatable)
    #[arg(short, long = "amount")]
    pub amounts: Vec<String>,

    /// Month the allocation applies to
    #[arg(short, long)]
    pub period: Option<String>,
}

/// Handle the `allocate` command
pub fn handle_allocate_command(
    settings: &Settings,
    reference: &ReferenceData,
    args: AllocateArgs,
) -> CostsplitResult<()> {
    let target_total = super::parse_money("budget total", &args.total)?;
    let supplied = super::parse_amount_pairs(&args.amounts)?;

    let categories = reference.category_set()?;
    for category in supplied.keys() {
        if !categories.contains(category) {
            return Err(CostsplitError::Validation(format!(
                "Unknown project: {}",
                category
            )));
        }
    }

    let period = match &args.period {
        Some(raw) => Period::canonicalize(raw),
        None => None,
    };

    let redistributor = Redistributor::new(categories);
    let result = redistributor.allocate(period.as_ref(), target_total, &supplied);

    println!("Total distributed: {}", target_total);
    println!("{}", render_distribution(&result, &settings.balance_label));

    if let Some(excess) = result.over_allocation {
        println!(
            "Warning: project amounts exceed the budget by {}; the balance is negative",
            excess
        );
    }

    Ok(())
}
