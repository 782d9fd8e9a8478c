//! Custom error types for the budget tracker
//!
//! Defines the crate-wide error enum using thiserror.

use thiserror::Error;

use crate::models::Money;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Ledger file could not be read, parsed or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Rejected user input (bad or negative amounts)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Summary export failed
    #[error("Export error: {0}")]
    Export(String),

    /// Export was requested before any summary was rendered
    #[error("No summary to export; view the summary first")]
    NoSummary,

    /// The user declined a confirmation prompt
    #[error("Cancelled: {0}")]
    Cancelled(String),
}

impl BudgetError {
    /// Error for an amount the user typed that is not a usable number
    pub fn invalid_amount() -> Self {
        Self::Validation("Please enter a valid positive number.".into())
    }

    /// Error for an amount, or a running total, beyond what a ledger can hold
    pub fn amount_too_large() -> Self {
        Self::Validation(format!(
            "Amount is too large; a budget can hold at most {}.",
            Money::MAX
        ))
    }

    /// Errors the interactive shell reports and then carries on from
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::NoSummary | Self::Cancelled(_) | Self::Export(_)
        )
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;
