//! Monthly distribution command
//!
//! Loads the baseline for the selected month from the distribution source and
//! rescales it to the target total. With no explicit target, the recorded
//! baseline total is distributed as-is.

use std::path::PathBuf;

use clap::Args;

use crate::config::{CostsplitPaths, ReferenceData, Settings};
use crate::display::render_distribution;
use crate::error::{CostsplitError, CostsplitResult};
use crate::models::{Money, Period};
use crate::services::{BaselineExtractor, BaselineService, Redistributor};
use crate::source::CsvFileSource;

/// Arguments for the `distribute` command
#[derive(Args)]
pub struct DistributeArgs {
    /// Month to distribute (e.g., "June 2025")
    pub period: String,

    /// Target total to distribute; defaults to the recorded baseline total
    #[arg(short = 'T', long)]
    pub total: Option<String>,

    /// Distribution source CSV; defaults to the configured data file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Handle the `distribute` command
pub fn handle_distribute_command(
    paths: &CostsplitPaths,
    settings: &Settings,
    reference: &ReferenceData,
    args: DistributeArgs,
) -> CostsplitResult<()> {
    let period = Period::canonicalize(&args.period)
        .ok_or_else(|| CostsplitError::Validation("Month must not be empty".into()))?;

    let source_path = args.file.unwrap_or_else(|| paths.distribution_file());
    let source = CsvFileSource::new(source_path).with_skip_rows(settings.header_offset);

    let categories = reference.category_set()?;
    let extractor = BaselineExtractor::from_settings(settings, categories.clone());
    let service = BaselineService::new(source, extractor);

    let baseline = service.baseline_for(&period);

    let target_total = match &args.total {
        Some(value) => super::parse_money("target total", value)?,
        None => baseline.as_ref().map(|b| b.total).unwrap_or(Money::zero()),
    };

    println!("Selected month's total value: {}", target_total);

    let redistributor = Redistributor::new(categories);
    match redistributor.redistribute(&period, target_total, baseline.as_ref()) {
        Ok(result) => {
            println!("{}", render_distribution(&result, &settings.balance_label));
            Ok(())
        }
        Err(err) if err.is_unavailable() => {
            // "Cannot calculate" is an answer, not a crash
            println!("Cannot calculate distribution: {}", err);
            Ok(())
        }
        Err(err) => Err(err),
    }
}
