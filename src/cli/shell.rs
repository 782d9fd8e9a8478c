//! Interactive session
//!
//! A line-oriented front end with a home menu and pages for income, expenses
//! and the summary. Input errors are reported and the session carries on;
//! storage failures end it.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::SummaryView;
use crate::models::Category;
use crate::storage::LedgerStore;

use super::expense::add_expense;
use super::income::add_income;
use super::input::{confirm, prompt_line};
use super::summary::CLEAR_QUESTION;

/// Where the session is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Income,
    Expense,
    Summary,
    Quit,
}

/// State for one interactive session
pub struct Shell<'a, R, W> {
    store: &'a mut LedgerStore,
    settings: &'a Settings,
    view: SummaryView,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a mut LedgerStore, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            store,
            settings,
            view: SummaryView::new(),
            input,
            output,
        }
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> BudgetResult<()> {
        writeln!(self.output, "Welcome to Budget Tracker")?;

        let mut page = Page::Home;
        while page != Page::Quit {
            page = match page {
                Page::Home => self.home()?,
                Page::Income => self.income_page()?,
                Page::Expense => self.expense_page()?,
                Page::Summary => self.summary_page()?,
                Page::Quit => Page::Quit,
            };
        }

        writeln!(self.output, "Goodbye.")?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> BudgetResult<Option<String>> {
        prompt_line(&mut self.input, &mut self.output, text)
    }

    /// Print recoverable errors and continue; pass anything else up
    fn report(&mut self, result: BudgetResult<()>) -> BudgetResult<()> {
        match result {
            Err(BudgetError::NoSummary) => {
                writeln!(
                    self.output,
                    "Warning: Please view the summary before exporting."
                )?;
                Ok(())
            }
            Err(BudgetError::Validation(message)) => {
                writeln!(self.output, "Error: {}", message)?;
                Ok(())
            }
            Err(err) if err.is_recoverable() => {
                writeln!(self.output, "Error: {}", err)?;
                Ok(())
            }
            other => other,
        }
    }

    fn home(&mut self) -> BudgetResult<Page> {
        writeln!(self.output)?;
        writeln!(self.output, "  1) Add Income")?;
        writeln!(self.output, "  2) Add Expense")?;
        writeln!(self.output, "  3) View Summary")?;
        writeln!(self.output, "  q) Quit")?;

        let Some(choice) = self.prompt("> ")? else {
            return Ok(Page::Quit);
        };

        Ok(match choice.trim().to_ascii_lowercase().as_str() {
            "1" | "income" => Page::Income,
            "2" | "expense" => Page::Expense,
            "3" | "summary" => Page::Summary,
            "q" | "quit" | "exit" => Page::Quit,
            "" => Page::Home,
            other => {
                writeln!(self.output, "Unknown choice: {}", other)?;
                Page::Home
            }
        })
    }

    fn income_page(&mut self) -> BudgetResult<Page> {
        let Some(amount) = self.prompt("Income amount: ")? else {
            return Ok(Page::Quit);
        };

        let result = add_income(self.store, &amount).and_then(|_| {
            writeln!(self.output, "Income added successfully!")?;
            Ok(())
        });
        self.report(result)?;
        Ok(Page::Home)
    }

    fn expense_page(&mut self) -> BudgetResult<Page> {
        let Some(description) =
            self.prompt("Expense description (e.g., dinner, movie tickets): ")?
        else {
            return Ok(Page::Quit);
        };
        let Some(amount) = self.prompt("Expense amount ($): ")? else {
            return Ok(Page::Quit);
        };

        let names: Vec<&str> = Category::FIXED.iter().map(|c| c.name()).collect();
        let category_prompt = format!("Expense category [{}] (Other): ", names.join("/"));
        let Some(category) = self.prompt(&category_prompt)? else {
            return Ok(Page::Quit);
        };

        let result = add_expense(self.store, &description, &amount, &category).and_then(|_| {
            writeln!(self.output, "Expense added successfully!")?;
            Ok(())
        });
        self.report(result)?;
        Ok(Page::Home)
    }

    fn summary_page(&mut self) -> BudgetResult<Page> {
        loop {
            writeln!(self.output)?;
            let Some(choice) = self.prompt("[v]iew  [e]xport  [c]lear  [b]ack > ")? else {
                return Ok(Page::Quit);
            };

            match choice.trim().to_ascii_lowercase().as_str() {
                "v" | "view" => {
                    let result = self.show_summary();
                    self.report(result)?;
                }
                "e" | "export" => {
                    let result = self.export_summary();
                    self.report(result)?;
                }
                "c" | "clear" => self.clear_history()?,
                "b" | "back" | "" => return Ok(Page::Home),
                "q" | "quit" => return Ok(Page::Quit),
                other => writeln!(self.output, "Unknown choice: {}", other)?,
            }
        }
    }

    fn show_summary(&mut self) -> BudgetResult<()> {
        let text = self
            .view
            .render(self.store, &self.settings.currency_symbol)?
            .to_string();
        write!(self.output, "{}", text)?;
        Ok(())
    }

    fn export_summary(&mut self) -> BudgetResult<()> {
        if self.view.text().is_none() {
            return Err(BudgetError::NoSummary);
        }

        let prompt = format!("Export to file (.{}): ", self.settings.export_extension);
        let path = match self.prompt(&prompt)? {
            Some(path) if !path.trim().is_empty() => path,
            _ => {
                writeln!(self.output, "Export cancelled.")?;
                return Ok(());
            }
        };

        let written = self
            .view
            .export(Path::new(path.trim()), &self.settings.export_extension)?;
        writeln!(
            self.output,
            "Summary exported successfully to {}",
            written.display()
        )?;
        Ok(())
    }

    fn clear_history(&mut self) -> BudgetResult<()> {
        if !confirm(&mut self.input, &mut self.output, CLEAR_QUESTION)? {
            writeln!(self.output, "Nothing was cleared.")?;
            return Ok(());
        }

        self.store.clear()?;
        self.view.reset();
        writeln!(self.output, "Expense history cleared successfully!")?;
        Ok(())
    }
}

/// Run an interactive session over the given input and output
pub fn run_shell<R: BufRead, W: Write>(
    store: &mut LedgerStore,
    settings: &Settings,
    input: R,
    output: W,
) -> BudgetResult<()> {
    Shell::new(store, settings, input, output).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(store: &mut LedgerStore, script: &str) -> String {
        let mut output = Vec::new();
        run_shell(store, &Settings::default(), Cursor::new(script.to_string()), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_full_session() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = LedgerStore::new(temp_dir.path().join("budget.json"));

        let script = "1\n1000.00\n2\nrent\n500\nRent\n2\ncoffee\n4.50\nfood\n3\nv\nb\nq\n";
        let output = run(&mut store, script);

        assert!(output.contains("Income added successfully!"));
        assert!(output.contains("Total Income: $1000.00"));
        assert!(output.contains("Total Expenses: $504.50"));
        assert!(output.contains("Balance: $495.50"));
        assert!(output.contains("- Rent: $500.00"));
        assert!(output.contains("- Food: $4.50"));
        assert!(output.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_negative_income_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = LedgerStore::new(temp_dir.path().join("budget.json"));

        let output = run(&mut store, "1\n-5\nq\n");

        assert!(output.contains("Error: Please enter a valid positive number."));
        assert!(store.ledger().income.is_zero());
    }

    #[test]
    fn test_export_before_view_warns() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = LedgerStore::new(temp_dir.path().join("budget.json"));

        let output = run(&mut store, "3\ne\nb\nq\n");

        assert!(output.contains("Warning: Please view the summary before exporting."));
        let written: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().collect();
        assert!(written.is_empty());
    }

    #[test]
    fn test_view_then_export() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = LedgerStore::new(temp_dir.path().join("budget.json"));
        store.add_income(crate::models::Money::from_cents(2000)).unwrap();
        let target = temp_dir.path().join("summary");

        let script = format!("3\nv\ne\n{}\nb\nq\n", target.display());
        let output = run(&mut store, &script);

        assert!(output.contains("Summary exported successfully"));
        let text = std::fs::read_to_string(target.with_extension("txt")).unwrap();
        assert!(text.starts_with("Total Income: $20.00\n"));
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = LedgerStore::new(temp_dir.path().join("budget.json"));
        store.add_income(crate::models::Money::from_cents(2000)).unwrap();

        let output = run(&mut store, "3\nc\nn\nb\nq\n");
        assert!(output.contains("Nothing was cleared."));
        assert_eq!(store.ledger().income.cents(), 2000);

        let output = run(&mut store, "3\nv\nc\ny\ne\nb\nq\n");
        assert!(output.contains("Expense history cleared successfully!"));
        assert!(store.ledger().is_empty());
        // The old summary is gone, so export warns again
        assert!(output.contains("Warning: Please view the summary before exporting."));
    }

    #[test]
    fn test_eof_ends_session() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = LedgerStore::new(temp_dir.path().join("budget.json"));

        let output = run(&mut store, "2\nlunch\n");
        assert!(output.ends_with("Goodbye.\n"));
        assert!(store.ledger().expenses.is_empty());
    }
}
