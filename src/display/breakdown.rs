//! Project expense breakdown rendering

use tabled::settings::Style;
use tabled::Tabled;

use crate::config::settings::OverheadRates;
use crate::services::ExpenseBreakdown;

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Render a project expense breakdown as a terminal table
pub fn render_breakdown(result: &ExpenseBreakdown, rates: &OverheadRates) -> String {
    let pct = |rate: f64| format!("{:.0}%", rate * 100.0);

    let rows = vec![
        BreakdownRow {
            description: format!("Core Team Salary ({})", pct(rates.core_team)),
            amount: result.core_team_salary.to_string(),
        },
        BreakdownRow {
            description: format!("CSR Admin Expenses ({})", pct(rates.csr_admin)),
            amount: result.csr_admin_expenses.to_string(),
        },
        BreakdownRow {
            description: format!("HR Expenses ({})", pct(rates.hr)),
            amount: result.hr_expenses.to_string(),
        },
        BreakdownRow {
            description: format!("Total ({})", pct(rates.total())),
            amount: result.overhead_total.to_string(),
        },
        BreakdownRow {
            description: format!("Project Direct Expenses ({})", pct(1.0 - rates.total())),
            amount: result.direct_expenses.to_string(),
        },
    ];

    tabled::Table::new(rows).with(Style::sharp()).to_string()
}
