//! Expense model
//!
//! One categorized outflow. Expenses carry no id or timestamp; their position
//! in the ledger is their identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Free-form description (e.g. "dinner", "movie tickets")
    pub description: String,

    /// Amount spent, never negative
    pub amount: Money,

    /// Category; older files without this field load as `Other`
    #[serde(default)]
    pub category: Category,
}

impl Expense {
    pub fn new(description: impl Into<String>, amount: Money, category: Category) -> Self {
        Self {
            description: description.into(),
            amount,
            category,
        }
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | Category: {}",
            self.description, self.amount, self.category
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
