//! Ledger entry models
//!
//! Form entries recorded into the append-only expense ledgers: HR expenses,
//! CSR admin expenses, and internship revenue.

use serde::{Deserialize, Serialize};

use crate::error::{CostsplitError, CostsplitResult};

use super::money::Money;
use super::period::Period;

/// An HR expense entry for the master expense sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrExpenseEntry {
    pub vendor: String,
    pub service: String,
    pub payment_frequency: String,
    pub annual_commitment: Money,
    pub monthly_average: Money,
    pub actual_expense: Money,
}

impl HrExpenseEntry {
    /// Validate the entry before persistence
    ///
    /// Vendor, service, and payment frequency are mandatory.
    pub fn validate(&self) -> CostsplitResult<()> {
        require_text("Vendor", &self.vendor)?;
        require_text("Service", &self.service)?;
        require_text("Payment frequency", &self.payment_frequency)?;
        Ok(())
    }
}

/// A CSR admin expense entry, persisted together with its manual project
/// allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsrExpenseEntry {
    pub period: Period,
    pub vendor: String,
    pub expense_type: String,
    pub payment_frequency: String,
    pub annual_commitment: Money,
    /// The distribution budget the manual allocation is measured against
    pub monthly_average: Money,
    /// Recorded separately; not part of the distribution
    pub actual_expense: Money,
}

impl CsrExpenseEntry {
    /// Validate the entry before persistence
    pub fn validate(&self) -> CostsplitResult<()> {
        require_text("Vendor", &self.vendor)?;
        require_text("Expense type", &self.expense_type)?;
        require_text("Payment frequency", &self.payment_frequency)?;
        if !self.monthly_average.is_positive() {
            return Err(CostsplitError::Validation(
                "Monthly average must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// An internship revenue entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternshipEntry {
    pub student_name: String,
    pub qualification: String,
    pub phone_number: String,
    pub amount: Money,
}

impl InternshipEntry {
    /// Validate the entry before persistence
    ///
    /// Name, qualification, and phone number are mandatory.
    pub fn validate(&self) -> CostsplitResult<()> {
        require_text("Student name", &self.student_name)?;
        require_text("Educational qualification", &self.qualification)?;
        require_text("Phone number", &self.phone_number)?;
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> CostsplitResult<()> {
    if value.trim().is_empty() {
        Err(CostsplitError::Validation(format!(
            "{} must not be empty",
            field
        )))
    } else {
        Ok(())
    }
}
