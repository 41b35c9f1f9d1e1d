//! User settings for costsplit
//!
//! Manages preferences for the distribution source layout (header offset,
//! period column, total column resolution), the balance line label, and the
//! overhead percentage rates used by the project expense calculator.

use serde::{Deserialize, Serialize};

use super::paths::CostsplitPaths;
use crate::error::CostsplitError;

/// How the total column of the distribution source is located
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "strategy", content = "name")]
pub enum TotalColumnRule {
    /// The column immediately to the right of the period column (default,
    /// matches the source spreadsheet layout)
    #[default]
    RightOfPeriod,

    /// A column located by exact trimmed name
    Named(String),
}

/// Overhead percentage rates for the project expense calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverheadRates {
    /// Core team salary share of the project value
    pub core_team: f64,
    /// CSR admin expense share
    pub csr_admin: f64,
    /// HR expense share
    pub hr: f64,
}

impl OverheadRates {
    /// Combined overhead share
    pub fn total(&self) -> f64 {
        self.core_team + self.csr_admin + self.hr
    }
}

impl Default for OverheadRates {
    fn default() -> Self {
        Self {
            core_team: 0.05,
            csr_admin: 0.05,
            hr: 0.05,
        }
    }
}

/// User settings for costsplit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Name of the period column in the distribution source
    #[serde(default = "default_period_column")]
    pub period_column: String,

    /// Physical rows skipped before the header row of the source
    #[serde(default = "default_header_offset")]
    pub header_offset: usize,

    /// How the total column is located
    #[serde(default)]
    pub total_column: TotalColumnRule,

    /// Label of the closing-balance line appended after the named categories
    #[serde(default = "default_balance_label")]
    pub balance_label: String,

    /// Overhead rates for the project expense calculator
    #[serde(default)]
    pub overhead_rates: OverheadRates,
}

fn default_schema_version() -> u32 {
    1
}

fn default_period_column() -> String {
    "Month".to_string()
}

fn default_header_offset() -> usize {
    1
}

fn default_balance_label() -> String {
    "LSGB (Balance)".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            period_column: default_period_column(),
            header_offset: default_header_offset(),
            total_column: TotalColumnRule::default(),
            balance_label: default_balance_label(),
            overhead_rates: OverheadRates::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CostsplitPaths) -> Result<Self, CostsplitError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| CostsplitError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CostsplitError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CostsplitPaths) -> Result<(), CostsplitError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CostsplitError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| CostsplitError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
