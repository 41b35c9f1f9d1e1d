//! Project expense calculator command

use clap::Args;

use crate::config::{CostsplitPaths, ReferenceData, Settings};
use crate::display::render_breakdown;
use crate::error::CostsplitResult;
use crate::services::{breakdown, LedgerService};
use crate::sink::CsvLedgerSink;

/// Arguments for the `calc` command
#[derive(Args)]
pub struct CalcArgs {
    /// Project value (e.g., "100000" or "100000.00")
    pub value: String,

    /// Project name (used when saving)
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Project type (used when saving)
    #[arg(short = 't', long = "type", default_value = "")]
    pub project_type: String,

    /// Append the breakdown to the project expenses ledger
    #[arg(long)]
    pub save: bool,
}

/// Handle the `calc` command
pub fn handle_calc_command(
    paths: &CostsplitPaths,
    settings: &Settings,
    reference: &ReferenceData,
    args: CalcArgs,
) -> CostsplitResult<()> {
    let value = super::parse_money("project value", &args.value)?;
    let result = breakdown(value, &settings.overhead_rates)?;

    println!("Project Expense Breakdown: {}", value);
    println!("{}", render_breakdown(&result, &settings.overhead_rates));

    if args.save {
        paths.ensure_directories()?;
        let categories = reference.category_set()?;
        let service = LedgerService::new(&categories, &settings.balance_label);
        let sink = CsvLedgerSink::new(paths.projects_ledger());
        service.record_breakdown(&sink, &args.name, &args.project_type, &result)?;
        println!("Saved to {}", sink.path().display());
    }

    Ok(())
}
