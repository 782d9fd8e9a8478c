//! Summary and clear commands

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::SummaryView;
use crate::storage::LedgerStore;

use super::input::confirm;

pub const CLEAR_QUESTION: &str =
    "Are you sure you want to clear all expenses and reset the income?";

/// Print the summary, optionally exporting it to `output`
pub fn handle_summary_command(
    store: &LedgerStore,
    settings: &Settings,
    output: Option<PathBuf>,
) -> BudgetResult<()> {
    let mut view = SummaryView::new();
    print!("{}", view.render(store, &settings.currency_symbol)?);

    if let Some(path) = output {
        let written = view.export(&path, &settings.export_extension)?;
        println!();
        println!("Summary exported to {}", written.display());
    }
    Ok(())
}

/// Clear the ledger, asking first unless `assume_yes` is set
pub fn handle_clear_command<R: BufRead, W: Write>(
    store: &mut LedgerStore,
    assume_yes: bool,
    input: &mut R,
    output: &mut W,
) -> BudgetResult<()> {
    if !assume_yes && !confirm(input, output, CLEAR_QUESTION)? {
        return Err(BudgetError::Cancelled("ledger left unchanged".into()));
    }

    store.clear()?;
    writeln!(output, "Expense history cleared successfully!")?;
    Ok(())
}
