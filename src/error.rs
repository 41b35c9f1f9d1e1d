//! Custom error types for costsplit
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for costsplit operations
#[derive(Error, Debug)]
pub enum CostsplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV parsing/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// The tabular data source could not be opened or parsed
    #[error("Source unreadable: {0}")]
    Source(String),

    /// Appending to a ledger file failed
    #[error("Ledger write failed: {0}")]
    Sink(String),

    /// No baseline exists for the requested period, or its total is zero
    #[error("Distribution unavailable for {period}: {reason}")]
    DistributionUnavailable { period: String, reason: String },

    /// Validation errors for user-supplied data
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CostsplitError {
    /// Create a "distribution unavailable" error for a period with no baseline
    pub fn no_baseline(period: impl Into<String>) -> Self {
        Self::DistributionUnavailable {
            period: period.into(),
            reason: "no baseline recorded".into(),
        }
    }

    /// Create a "distribution unavailable" error for a zero baseline total
    pub fn zero_baseline(period: impl Into<String>) -> Self {
        Self::DistributionUnavailable {
            period: period.into(),
            reason: "baseline total is zero".into(),
        }
    }

    /// Check if this is a "distribution unavailable" error
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::DistributionUnavailable { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CostsplitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for CostsplitError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for CostsplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_yaml::Error> for CostsplitError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for costsplit operations
pub type CostsplitResult<T> = Result<T, CostsplitError>;
