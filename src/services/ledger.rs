//! Ledger recording service
//!
//! Turns validated form entries into ledger rows and appends them through a
//! `LedgerSink`. Row layouts mirror the master sheets: entry fields first,
//! then one column per project, then the balance column.

use chrono::Local;

use crate::error::{CostsplitError, CostsplitResult};
use crate::models::{
    CategorySet, CsrExpenseEntry, DistributionResult, HrExpenseEntry, InternshipEntry, Money,
};
use crate::services::calculator::ExpenseBreakdown;
use crate::sink::{LedgerRow, LedgerSink};

/// Builds and appends ledger rows for a fixed category set
pub struct LedgerService<'a> {
    categories: &'a CategorySet,
    balance_label: &'a str,
}

impl<'a> LedgerService<'a> {
    /// Create a ledger service
    pub fn new(categories: &'a CategorySet, balance_label: &'a str) -> Self {
        Self {
            categories,
            balance_label,
        }
    }

    /// Record an HR expense entry
    ///
    /// The HR form does not distribute across projects, so the project and
    /// balance columns are written as zero for sheet-structure consistency.
    pub fn record_hr(&self, sink: &dyn LedgerSink, entry: &HrExpenseEntry) -> CostsplitResult<()> {
        entry.validate()?;

        let mut row = LedgerRow::new()
            .with("Date Saved", timestamp())
            .with("Vendor", &entry.vendor)
            .with("Service", &entry.service)
            .with("Payment frequency", &entry.payment_frequency)
            .with(
                "Annual commitment",
                entry.annual_commitment.to_decimal_string(),
            )
            .with("Monthly Average", entry.monthly_average.to_decimal_string())
            .with("Actual expense", entry.actual_expense.to_decimal_string());

        for category in self.categories.iter() {
            row.push(category, Money::zero().to_decimal_string());
        }
        row.push(self.balance_label, Money::zero().to_decimal_string());

        sink.append(&row)
    }

    /// Record a CSR admin expense entry with its manual project allocation
    ///
    /// Persistence is blocked on the over-allocation signal; the computation
    /// itself already happened and is untouched.
    pub fn record_csr(
        &self,
        sink: &dyn LedgerSink,
        entry: &CsrExpenseEntry,
        allocation: &DistributionResult,
    ) -> CostsplitResult<()> {
        entry.validate()?;

        if let Some(excess) = allocation.over_allocation {
            return Err(CostsplitError::Validation(format!(
                "Project amounts exceed the monthly average budget by {}",
                excess
            )));
        }
        if allocation.target_total != entry.monthly_average {
            return Err(CostsplitError::Validation(
                "Allocation was computed against a different monthly average".into(),
            ));
        }

        let mut row = LedgerRow::new()
            .with("Month", entry.period.to_string())
            .with("Vendor", &entry.vendor)
            .with("Expense Type", &entry.expense_type)
            .with("Payment Frequency", &entry.payment_frequency)
            .with(
                "Annual Commitment",
                entry.annual_commitment.to_decimal_string(),
            )
            .with("Monthly Average", entry.monthly_average.to_decimal_string())
            .with("Actual", entry.actual_expense.to_decimal_string());

        for split in &allocation.splits {
            row.push(&split.category, split.amount.to_decimal_string());
        }
        row.push(self.balance_label, allocation.balance.to_decimal_string());

        sink.append(&row)
    }

    /// Record an internship revenue entry
    pub fn record_internship(
        &self,
        sink: &dyn LedgerSink,
        entry: &InternshipEntry,
    ) -> CostsplitResult<()> {
        entry.validate()?;

        let row = LedgerRow::new()
            .with("Student Name", &entry.student_name)
            .with("Educational Qualification", &entry.qualification)
            .with("Phone Number", &entry.phone_number)
            .with("Internship Amount", entry.amount.to_decimal_string())
            .with("Date Saved", timestamp());

        sink.append(&row)
    }

    /// Record a project expense breakdown
    pub fn record_breakdown(
        &self,
        sink: &dyn LedgerSink,
        project_name: &str,
        project_type: &str,
        result: &ExpenseBreakdown,
    ) -> CostsplitResult<()> {
        let row = LedgerRow::new()
            .with("Project Name", project_name)
            .with("Project Type", project_type)
            .with("Project Value", result.project_value.to_decimal_string())
            .with(
                "Core Team Salary",
                result.core_team_salary.to_decimal_string(),
            )
            .with(
                "CSR Admin Expenses",
                result.csr_admin_expenses.to_decimal_string(),
            )
            .with("HR Expenses", result.hr_expenses.to_decimal_string())
            .with("Overhead Total", result.overhead_total.to_decimal_string())
            .with(
                "Project Direct Expenses",
                result.direct_expenses.to_decimal_string(),
            )
            .with("Date Saved", timestamp());

        sink.append(&row)
    }
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
