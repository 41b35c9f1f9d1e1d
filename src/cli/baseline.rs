//! Baseline inspection commands
//!
//! Read-only views over the distribution source: list every recovered month,
//! or show the recorded split for one of them.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use tabled::settings::Style;
use tabled::{Table as TextTable, Tabled};

use crate::config::{CostsplitPaths, ReferenceData, Settings};
use crate::error::{CostsplitError, CostsplitResult};
use crate::models::Period;
use crate::services::{BaselineExtractor, BaselineService};
use crate::source::CsvFileSource;

/// Commands for inspecting recorded baselines
#[derive(Subcommand)]
pub enum BaselineCommands {
    /// List every month with a recorded baseline
    List(BaselineListArgs),
    /// Show the recorded split for one month
    Show(BaselineShowArgs),
}

/// Arguments for `baseline list`
#[derive(Args)]
pub struct BaselineListArgs {
    /// Distribution source CSV; defaults to the configured data file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Arguments for `baseline show`
#[derive(Args)]
pub struct BaselineShowArgs {
    /// Month to show (e.g., "June 2025")
    pub period: String,

    /// Distribution source CSV; defaults to the configured data file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(Tabled)]
struct BaselineListRow {
    #[tabled(rename = "Month")]
    period: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Residual")]
    residual: String,
}

#[derive(Tabled)]
struct BaselineShowRow {
    #[tabled(rename = "Project")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn service(
    paths: &CostsplitPaths,
    settings: &Settings,
    reference: &ReferenceData,
    file: Option<PathBuf>,
) -> CostsplitResult<BaselineService<CsvFileSource>> {
    let source_path = file.unwrap_or_else(|| paths.distribution_file());
    let source = CsvFileSource::new(source_path).with_skip_rows(settings.header_offset);
    let extractor = BaselineExtractor::from_settings(settings, reference.category_set()?);
    Ok(BaselineService::new(source, extractor))
}

/// Handle `baseline` subcommands
pub fn handle_baseline_command(
    paths: &CostsplitPaths,
    settings: &Settings,
    reference: &ReferenceData,
    command: BaselineCommands,
) -> CostsplitResult<()> {
    match command {
        BaselineCommands::List(args) => {
            let service = service(paths, settings, reference, args.file)?;
            let table = service.try_table()?;

            if table.is_empty() {
                println!("No baselines recorded.");
                return Ok(());
            }

            let rows: Vec<BaselineListRow> = table
                .iter()
                .map(|record| BaselineListRow {
                    period: record.period.to_string(),
                    total: record.total.to_string(),
                    residual: record.implied_residual().to_string(),
                })
                .collect();
            println!("{}", TextTable::new(rows).with(Style::sharp()));
        }
        BaselineCommands::Show(args) => {
            let period = Period::canonicalize(&args.period)
                .ok_or_else(|| CostsplitError::Validation("Month must not be empty".into()))?;

            let service = service(paths, settings, reference, args.file)?;
            let record = service.try_table()?.get(&period).cloned().ok_or_else(|| {
                CostsplitError::Validation(format!("No baseline recorded for {}", period))
            })?;

            println!("Baseline for {}: {}", record.period, record.total);

            let mut rows: Vec<BaselineShowRow> = service
                .categories()
                .iter()
                .map(|category| BaselineShowRow {
                    category: category.to_string(),
                    amount: record.split_for(category).to_string(),
                })
                .collect();
            rows.push(BaselineShowRow {
                category: "Residual".into(),
                amount: record.implied_residual().to_string(),
            });
            println!("{}", TextTable::new(rows).with(Style::sharp()));
        }
    }

    Ok(())
}
