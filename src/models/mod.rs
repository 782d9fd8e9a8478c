//! Core data models
//!
//! The ledger aggregate and the value types it is built from.

pub mod category;
pub mod expense;
pub mod ledger;
pub mod money;

pub use category::Category;
pub use expense::{Expense, ExpenseValidationError};
pub use ledger::{Ledger, LedgerValidationError};
pub use money::{Money, MoneyParseError};
