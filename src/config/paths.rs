//! Path management for costsplit
//!
//! Provides platform-appropriate path resolution for configuration, the
//! distribution source file, and the expense ledgers.
//!
//! ## Path Resolution Order
//!
//! 1. `COSTSPLIT_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (e.g. `~/.config/costsplit` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CostsplitError;

/// Manages all paths used by costsplit
#[derive(Debug, Clone)]
pub struct CostsplitPaths {
    /// Base directory for all costsplit data
    base_dir: PathBuf,
}

impl CostsplitPaths {
    /// Create a new CostsplitPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, CostsplitError> {
        let base_dir = if let Ok(custom) = std::env::var("COSTSPLIT_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CostsplitPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (ledgers and the distribution source)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the reference-data file (category and vendor lists)
    pub fn reference_file(&self) -> PathBuf {
        self.base_dir.join("reference.yaml")
    }

    /// Get the path to the monthly distribution source spreadsheet
    pub fn distribution_file(&self) -> PathBuf {
        self.data_dir().join("distribution.csv")
    }

    /// Get the path to the HR expenses master ledger
    pub fn hr_ledger(&self) -> PathBuf {
        self.data_dir().join("hr_expenses.csv")
    }

    /// Get the path to the CSR admin expenses ledger
    pub fn csr_ledger(&self) -> PathBuf {
        self.data_dir().join("csr_admin_expenses.csv")
    }

    /// Get the path to the internship revenue ledger
    pub fn internship_ledger(&self) -> PathBuf {
        self.data_dir().join("internship_revenue.csv")
    }

    /// Get the path to the project expense breakdown ledger
    pub fn projects_ledger(&self) -> PathBuf {
        self.data_dir().join("project_expenses.csv")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), CostsplitError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CostsplitError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CostsplitError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
fn resolve_default_path() -> Result<PathBuf, CostsplitError> {
    ProjectDirs::from("", "", "costsplit")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CostsplitError::Config("Could not determine home directory".into()))
}
