//! Budget Tracker - personal income and expense record-keeping
//!
//! Keeps an income total and a list of categorized expenses in a JSON file,
//! and renders a plain-text summary that can be exported.
//!
//! # Architecture
//!
//! - `config`: Ledger/settings paths and user settings
//! - `error`: Custom error types
//! - `models`: Money, categories, expenses and the ledger aggregate
//! - `storage`: Write-through JSON storage for the ledger
//! - `reports`: Summary aggregation and rendering
//! - `export`: Writing rendered summaries to text files
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust,no_run
//! use budget_tracker::models::{Category, Money};
//! use budget_tracker::reports::Summary;
//! use budget_tracker::storage::LedgerStore;
//!
//! # fn main() -> budget_tracker::BudgetResult<()> {
//! let mut store = LedgerStore::open("budget.json")?;
//! store.add_income(Money::from_cents(100000))?;
//! store.add_expense("coffee", Money::from_cents(450), Category::Food)?;
//! print!("{}", Summary::generate(store.ledger())?.render("$"));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
