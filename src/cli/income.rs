//! Income CLI commands

use clap::Subcommand;

use crate::error::BudgetResult;
use crate::models::Money;
use crate::storage::LedgerStore;

use super::input::parse_amount;

/// Income subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// Add to the income total
    Add {
        /// Amount (e.g., "1000" or "1000.00")
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },

    /// Show the income total
    Show,
}

/// Handle an income command
pub fn handle_income_command(store: &mut LedgerStore, cmd: IncomeCommands) -> BudgetResult<()> {
    match cmd {
        IncomeCommands::Add { amount } => {
            let added = add_income(store, &amount)?;
            println!("Income added successfully: {}", added);
            println!("Total income: {}", store.ledger().income);
        }
        IncomeCommands::Show => {
            println!("Total income: {}", store.ledger().income);
        }
    }
    Ok(())
}

/// Validate `amount_text` and add it to the store's income
pub fn add_income(store: &mut LedgerStore, amount_text: &str) -> BudgetResult<Money> {
    let amount = parse_amount(amount_text)?;
    store.add_income(amount)?;
    Ok(amount)
}
