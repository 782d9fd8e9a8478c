//! Budget summary report
//!
//! Aggregates the ledger into income, total expenses, balance and per-category
//! totals, and renders them as plain text.

use std::fmt::Write as _;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, Expense, Ledger, Money};

/// Spending for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
}

/// A point-in-time summary of a ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub income: Money,
    pub total_expenses: Money,
    /// Income minus total expenses; not clamped at zero
    pub balance: Money,
    /// Per-category totals, in order of first appearance
    pub category_totals: Vec<CategoryTotal>,
    /// Expenses in insertion order
    pub expenses: Vec<Expense>,
}

impl Summary {
    /// Build a summary from the current ledger.
    ///
    /// Fails only if the expenses add up to more than [`Money::MAX`], which a
    /// ledger loaded or built through the store never does.
    pub fn generate(ledger: &Ledger) -> BudgetResult<Self> {
        let total_expenses = ledger
            .total_expenses()
            .ok_or_else(BudgetError::amount_too_large)?;

        let mut category_totals: Vec<CategoryTotal> = Vec::new();

        for expense in &ledger.expenses {
            match category_totals
                .iter_mut()
                .find(|t| t.category == expense.category)
            {
                Some(entry) => {
                    entry.total = entry
                        .total
                        .checked_add(expense.amount)
                        .ok_or_else(BudgetError::amount_too_large)?;
                }
                None => category_totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                }),
            }
        }

        Ok(Self {
            income: ledger.income,
            total_expenses,
            balance: ledger.income - total_expenses,
            category_totals,
            expenses: ledger.expenses.clone(),
        })
    }

    /// Render the report using `symbol` as the currency symbol
    pub fn render(&self, symbol: &str) -> String {
        let fmt = |m: Money| m.format_with_symbol(symbol);
        let mut out = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(out, "Total Income: {}", fmt(self.income));
        let _ = writeln!(out, "Total Expenses: {}", fmt(self.total_expenses));
        let _ = writeln!(out, "Balance: {}", fmt(self.balance));

        out.push_str("\nExpenses by Category:\n");
        for entry in &self.category_totals {
            let _ = writeln!(out, "- {}: {}", entry.category, fmt(entry.total));
        }

        out.push_str("\nDetailed Expenses:\n");
        for expense in &self.expenses {
            let _ = writeln!(
                out,
                "- {} | {} | Category: {}",
                expense.description,
                fmt(expense.amount),
                expense.category
            );
        }

        out
    }
}
