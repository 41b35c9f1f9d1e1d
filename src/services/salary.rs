//! Attendance-based salary pro-rata
//!
//! Computes the payable amount for a core team member from their monthly CTC
//! and attendance: `ctc / days_in_month * attendance_days`.

use crate::error::{CostsplitError, CostsplitResult};
use crate::models::Money;

/// Compute a salary amount prorated by attendance
///
/// `days_in_month` must be between 28 and 31; `attendance_days` must not
/// exceed it. A zero CTC prorates to zero.
pub fn prorated_salary(
    monthly_ctc: Money,
    days_in_month: u32,
    attendance_days: u32,
) -> CostsplitResult<Money> {
    if !(28..=31).contains(&days_in_month) {
        return Err(CostsplitError::Validation(format!(
            "Days in month must be between 28 and 31, got {}",
            days_in_month
        )));
    }
    if attendance_days > days_in_month {
        return Err(CostsplitError::Validation(format!(
            "Attendance ({}) exceeds days in month ({})",
            attendance_days, days_in_month
        )));
    }
    if monthly_ctc.is_negative() {
        return Err(CostsplitError::Validation(
            "Monthly CTC must not be negative".into(),
        ));
    }

    Ok(monthly_ctc.scale(attendance_days as f64 / days_in_month as f64))
}
