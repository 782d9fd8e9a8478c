//! Expense CLI commands

use clap::Subcommand;

use crate::error::BudgetResult;
use crate::models::{Category, Expense};
use crate::storage::LedgerStore;

use super::input::parse_amount;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on (e.g., "dinner", "movie tickets")
        description: String,

        /// Amount spent (e.g., "4.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,

        /// Food, Rent, Utilities, Transport, Entertainment, Other, or any custom name
        #[arg(short, long, default_value = "Other")]
        category: String,
    },

    /// List expenses in the order they were recorded
    List,
}

/// Handle an expense command
pub fn handle_expense_command(store: &mut LedgerStore, cmd: ExpenseCommands) -> BudgetResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
        } => {
            let expense = add_expense(store, &description, &amount, &category)?;
            println!("Expense added successfully: {}", expense);
        }
        ExpenseCommands::List => {
            print!("{}", format_expense_list(&store.ledger().expenses));
        }
    }
    Ok(())
}

/// Validate input and record an expense
pub fn add_expense(
    store: &mut LedgerStore,
    description: &str,
    amount_text: &str,
    category: &str,
) -> BudgetResult<Expense> {
    let amount = parse_amount(amount_text)?;
    let expense = store.add_expense(description.trim(), amount, Category::parse(category))?;
    Ok(expense.clone())
}

/// Numbered, column-aligned expense listing
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let desc_width = expenses
        .iter()
        .map(|e| e.description.chars().count())
        .max()
        .unwrap_or(0)
        .max("Description".len());
    let amounts: Vec<String> = expenses.iter().map(|e| e.amount.to_string()).collect();
    let amount_width = amounts
        .iter()
        .map(|a| a.len())
        .max()
        .unwrap_or(0)
        .max("Amount".len());

    let mut output = format!(
        "{:>3}  {:<dw$}  {:>aw$}  Category\n",
        "#",
        "Description",
        "Amount",
        dw = desc_width,
        aw = amount_width
    );

    for (i, (expense, amount)) in expenses.iter().zip(&amounts).enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<dw$}  {:>aw$}  {}\n",
            i + 1,
            expense.description,
            amount,
            expense.category,
            dw = desc_width,
            aw = amount_width
        ));
    }

    output
}

/// The fixed categories, one per line
pub fn format_category_list() -> String {
    let mut output = String::from("Categories:\n");
    for category in Category::FIXED.iter() {
        output.push_str(&format!("  {}\n", category));
    }
    output.push_str("\nAny other name is accepted as a custom category.\n");
    output
}
