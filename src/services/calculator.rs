//! Project expense calculator
//!
//! Breaks a project value into its fixed percentage components: core team
//! salary, CSR admin expenses, HR expenses, and the direct-expense remainder.
//! The direct line is derived by subtraction so the components always sum to
//! the project value exactly.

use serde::{Deserialize, Serialize};

use crate::config::settings::OverheadRates;
use crate::error::{CostsplitError, CostsplitResult};
use crate::models::Money;

/// The percentage breakdown of a project value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    pub project_value: Money,
    pub core_team_salary: Money,
    pub csr_admin_expenses: Money,
    pub hr_expenses: Money,
    /// Sum of the three overhead components
    pub overhead_total: Money,
    /// Project value less overhead
    pub direct_expenses: Money,
}

/// Compute the percentage breakdown of a project value
///
/// The project value must be positive.
pub fn breakdown(project_value: Money, rates: &OverheadRates) -> CostsplitResult<ExpenseBreakdown> {
    if !project_value.is_positive() {
        return Err(CostsplitError::Validation(
            "Project value must be greater than zero".into(),
        ));
    }

    let core_team_salary = project_value.scale(rates.core_team);
    let csr_admin_expenses = project_value.scale(rates.csr_admin);
    let hr_expenses = project_value.scale(rates.hr);

    let overhead_total = core_team_salary + csr_admin_expenses + hr_expenses;
    let direct_expenses = project_value - overhead_total;

    Ok(ExpenseBreakdown {
        project_value,
        core_team_salary,
        csr_admin_expenses,
        hr_expenses,
        overhead_total,
        direct_expenses,
    })
}
