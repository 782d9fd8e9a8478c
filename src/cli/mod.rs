//! CLI command handlers
//!
//! Bridges clap argument parsing and the interactive shell with the ledger
//! store. Handlers take the store explicitly and return errors for `main`
//! to report.

pub mod expense;
pub mod income;
pub mod input;
pub mod shell;
pub mod summary;

pub use expense::{format_category_list, handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use shell::run_shell;
pub use summary::{handle_clear_command, handle_summary_command};
