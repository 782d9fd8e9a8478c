//! Ledger model
//!
//! The aggregate root: an income total plus expenses in insertion order.
//! Its JSON shape is the ledger file format:
//!
//! ```json
//! { "income": 1000.0, "expenses": [ { "description": "rent", "amount": 500.0, "category": "Rent" } ] }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::{Expense, ExpenseValidationError};
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// Running income total
    #[serde(default)]
    pub income: Money,

    /// Expenses, oldest first
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Ledger {
    pub fn is_empty(&self) -> bool {
        self.income.is_zero() && self.expenses.is_empty()
    }

    /// Sum of all expense amounts, or `None` past [`Money::MAX`]
    pub fn total_expenses(&self) -> Option<Money> {
        self.expenses
            .iter()
            .try_fold(Money::zero(), |total, e| total.checked_add(e.amount))
    }

    /// Check the non-negativity invariants and that the expense total fits
    pub fn validate(&self) -> Result<(), LedgerValidationError> {
        if self.income.is_negative() {
            return Err(LedgerValidationError::NegativeIncome(self.income));
        }
        for (index, expense) in self.expenses.iter().enumerate() {
            expense
                .validate()
                .map_err(|source| LedgerValidationError::Expense { index, source })?;
        }
        if self.total_expenses().is_none() {
            return Err(LedgerValidationError::TotalTooLarge);
        }
        Ok(())
    }
}

/// Validation errors for a ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerValidationError {
    NegativeIncome(Money),
    Expense {
        index: usize,
        source: ExpenseValidationError,
    },
    TotalTooLarge,
}

impl fmt::Display for LedgerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeIncome(amount) => write!(f, "Income cannot be negative: {}", amount),
            Self::Expense { index, source } => write!(f, "Expense #{}: {}", index + 1, source),
            Self::TotalTooLarge => write!(f, "Expenses add up to more than {}", Money::MAX),
        }
    }
}

impl std::error::Error for LedgerValidationError {}
