//! Distribution table rendering

use tabled::settings::Style;
use tabled::Tabled;

use crate::models::DistributionResult;

#[derive(Tabled)]
struct DistributionRow {
    #[tabled(rename = "Project")]
    project: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Render a distribution as a terminal table
///
/// Named categories come first in their fixed order, then the balance line
/// under the configured label.
pub fn render_distribution(result: &DistributionResult, balance_label: &str) -> String {
    let mut rows: Vec<DistributionRow> = result
        .splits
        .iter()
        .map(|split| DistributionRow {
            project: split.category.clone(),
            amount: split.amount.to_string(),
        })
        .collect();

    rows.push(DistributionRow {
        project: balance_label.to_string(),
        amount: result.balance.to_string(),
    });

    tabled::Table::new(rows).with(Style::sharp()).to_string()
}
