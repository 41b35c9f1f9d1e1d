//! Expense recording commands
//!
//! Each subcommand validates a form entry and appends it to its ledger CSV.
//! Ledgers are append-only; a failed validation leaves the file untouched.

use clap::{Args, Subcommand};

use crate::config::{CostsplitPaths, ReferenceData, Settings};
use crate::display::render_distribution;
use crate::error::{CostsplitError, CostsplitResult};
use crate::models::{CsrExpenseEntry, HrExpenseEntry, InternshipEntry, Period};
use crate::services::{LedgerService, Redistributor};
use crate::sink::CsvLedgerSink;

/// Commands for recording expense and revenue entries
#[derive(Subcommand)]
pub enum RecordCommands {
    /// Record an HR expense
    Hr(HrArgs),
    /// Record a CSR admin expense with its project allocation
    Csr(CsrArgs),
    /// Record internship revenue
    Intern(InternArgs),
}

/// Arguments for `record hr`
#[derive(Args)]
pub struct HrArgs {
    /// Vendor name
    #[arg(short, long)]
    pub vendor: String,

    /// Service provided
    #[arg(short, long)]
    pub service: String,

    /// Payment frequency (e.g., "Monthly")
    #[arg(short = 'f', long)]
    pub frequency: String,

    /// Annual commitment amount
    #[arg(long, default_value = "0")]
    pub annual: String,

    /// Monthly average amount
    #[arg(long, default_value = "0")]
    pub monthly: String,

    /// Actual expense amount
    #[arg(short, long)]
    pub actual: String,
}

/// Arguments for `record csr`
#[derive(Args)]
pub struct CsrArgs {
    /// Month the expense applies to (e.g., "June 2025")
    #[arg(short, long)]
    pub period: String,

    /// Vendor name
    #[arg(short, long)]
    pub vendor: String,

    /// Expense type (e.g., "Internet Services")
    #[arg(short = 't', long = "type")]
    pub expense_type: String,

    /// Payment frequency (e.g., "Monthly")
    #[arg(short = 'f', long)]
    pub frequency: String,

    /// Annual commitment amount
    #[arg(long, default_value = "0")]
    pub annual: String,

    /// Monthly average amount; the allocation budget
    #[arg(long)]
    pub monthly: String,

    /// Actual expense amount
    #[arg(short, long)]
    pub actual: String,

    /// Per-project amount as CATEGORY=AMOUNT (repeatable)
    #[arg(short = 'm', long = "amount")]
    pub amounts: Vec<String>,
}

/// Arguments for `record intern`
#[derive(Args)]
pub struct InternArgs {
    /// Student name
    #[arg(short, long)]
    pub name: String,

    /// Educational qualification
    #[arg(short, long)]
    pub qualification: String,

    /// Phone number
    #[arg(short, long)]
    pub phone: String,

    /// Internship amount
    #[arg(short, long)]
    pub amount: String,
}

/// Handle `record` subcommands
pub fn handle_record_command(
    paths: &CostsplitPaths,
    settings: &Settings,
    reference: &ReferenceData,
    command: RecordCommands,
) -> CostsplitResult<()> {
    paths.ensure_directories()?;
    let categories = reference.category_set()?;
    let service = LedgerService::new(&categories, &settings.balance_label);

    match command {
        RecordCommands::Hr(args) => {
            let entry = HrExpenseEntry {
                vendor: args.vendor,
                service: args.service,
                payment_frequency: args.frequency,
                annual_commitment: super::parse_money("annual commitment", &args.annual)?,
                monthly_average: super::parse_money("monthly average", &args.monthly)?,
                actual_expense: super::parse_money("actual expense", &args.actual)?,
            };

            let sink = CsvLedgerSink::new(paths.hr_ledger());
            service.record_hr(&sink, &entry)?;
            println!("Recorded HR expense for {}", entry.vendor);
            println!("Saved to {}", sink.path().display());
        }
        RecordCommands::Csr(args) => {
            let period = Period::canonicalize(&args.period)
                .ok_or_else(|| CostsplitError::Validation("Month must not be empty".into()))?;

            // The CSR form is dropdown-only; free-form values are rejected
            reference.validate_csr_selection(
                &period,
                &args.vendor,
                &args.expense_type,
                &args.frequency,
            )?;

            let entry = CsrExpenseEntry {
                period: period.clone(),
                vendor: args.vendor,
                expense_type: args.expense_type,
                payment_frequency: args.frequency,
                annual_commitment: super::parse_money("annual commitment", &args.annual)?,
                monthly_average: super::parse_money("monthly average", &args.monthly)?,
                actual_expense: super::parse_money("actual expense", &args.actual)?,
            };

            let supplied = super::parse_amount_pairs(&args.amounts)?;
            for category in supplied.keys() {
                if !categories.contains(category) {
                    return Err(CostsplitError::Validation(format!(
                        "Unknown project: {}",
                        category
                    )));
                }
            }

            let redistributor = Redistributor::new(categories.clone());
            let allocation =
                redistributor.allocate(Some(&period), entry.monthly_average, &supplied);

            println!("{}", render_distribution(&allocation, &settings.balance_label));

            let sink = CsvLedgerSink::new(paths.csr_ledger());
            service.record_csr(&sink, &entry, &allocation)?;
            println!("Recorded CSR expense for {}", entry.vendor);
            println!("Saved to {}", sink.path().display());
        }
        RecordCommands::Intern(args) => {
            let entry = InternshipEntry {
                student_name: args.name,
                qualification: args.qualification,
                phone_number: args.phone,
                amount: super::parse_money("internship", &args.amount)?,
            };

            let sink = CsvLedgerSink::new(paths.internship_ledger());
            service.record_internship(&sink, &entry)?;
            println!("Recorded internship revenue from {}", entry.student_name);
            println!("Saved to {}", sink.path().display());
        }
    }

    Ok(())
}
