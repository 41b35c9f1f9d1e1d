//! Attendance-based salary command

use clap::Args;

use crate::error::CostsplitResult;
use crate::services::prorated_salary;

/// Arguments for the `salary` command
#[derive(Args)]
pub struct SalaryArgs {
    /// Monthly cost to company (e.g., "30000")
    pub ctc: String,

    /// Days worked in the month
    #[arg(short, long)]
    pub attendance: u32,

    /// Calendar days in the month
    #[arg(short, long, default_value_t = 30)]
    pub days: u32,
}

/// Handle the `salary` command
pub fn handle_salary_command(args: SalaryArgs) -> CostsplitResult<()> {
    let ctc = super::parse_money("monthly CTC", &args.ctc)?;
    let payable = prorated_salary(ctc, args.days, args.attendance)?;

    println!(
        "Payable salary for {}/{} days: {}",
        args.attendance, args.days, payable
    );

    Ok(())
}
