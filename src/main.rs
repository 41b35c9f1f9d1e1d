use anyhow::Result;
use clap::{Parser, Subcommand};

use costsplit::cli::{
    handle_allocate_command, handle_baseline_command, handle_calc_command,
    handle_distribute_command, handle_record_command, handle_salary_command, AllocateArgs,
    BaselineCommands, CalcArgs, DistributeArgs, RecordCommands, SalaryArgs,
};
use costsplit::config::{paths::CostsplitPaths, reference::ReferenceData, settings::Settings};

#[derive(Parser)]
#[command(
    name = "costsplit",
    version,
    about = "Business expense distribution from the command line",
    long_about = "costsplit recovers the monthly per-project expense split from a \
                  distribution spreadsheet, rescales it proportionally to a new \
                  target total, and records HR, CSR, and internship entries into \
                  append-only CSV ledgers."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Distribute a month's total across projects from its recorded baseline
    #[command(alias = "dist")]
    Distribute(DistributeArgs),

    /// Allocate a budget across projects from manually supplied amounts
    #[command(alias = "alloc")]
    Allocate(AllocateArgs),

    /// Break a project value into overhead and direct expense components
    Calc(CalcArgs),

    /// Compute an attendance-prorated salary
    Salary(SalaryArgs),

    /// Expense and revenue recording commands
    #[command(subcommand, alias = "rec")]
    Record(RecordCommands),

    /// Baseline inspection commands
    #[command(subcommand)]
    Baseline(BaselineCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths, settings, and reference lists
    let paths = CostsplitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let reference = ReferenceData::load_or_default(&paths)?;

    match cli.command {
        Some(Commands::Distribute(args)) => {
            handle_distribute_command(&paths, &settings, &reference, args)?;
        }
        Some(Commands::Allocate(args)) => {
            handle_allocate_command(&settings, &reference, args)?;
        }
        Some(Commands::Calc(args)) => {
            handle_calc_command(&paths, &settings, &reference, args)?;
        }
        Some(Commands::Salary(args)) => {
            handle_salary_command(args)?;
        }
        Some(Commands::Record(cmd)) => {
            handle_record_command(&paths, &settings, &reference, cmd)?;
        }
        Some(Commands::Baseline(cmd)) => {
            handle_baseline_command(&paths, &settings, &reference, cmd)?;
        }
        Some(Commands::Config) => {
            println!("costsplit Configuration");
            println!("=======================");
            println!("Base directory:      {}", paths.base_dir().display());
            println!("Data directory:      {}", paths.data_dir().display());
            println!("Distribution source: {}", paths.distribution_file().display());
            println!();
            println!("Settings:");
            println!("  Period column:  {}", settings.period_column);
            println!("  Header offset:  {}", settings.header_offset);
            println!("  Total column:   {:?}", settings.total_column);
            println!("  Balance label:  {}", settings.balance_label);
            println!(
                "  Overhead rates: core team {:.0}%, CSR admin {:.0}%, HR {:.0}%",
                settings.overhead_rates.core_team * 100.0,
                settings.overhead_rates.csr_admin * 100.0,
                settings.overhead_rates.hr * 100.0
            );
            println!();
            println!("Projects: {}", reference.projects.join(", "));
        }
        None => {
            println!("costsplit - Business expense distribution");
            println!();
            println!("Run 'costsplit --help' for usage information.");
        }
    }

    Ok(())
}
