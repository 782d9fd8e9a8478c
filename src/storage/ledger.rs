//! Ledger repository
//!
//! The single source of truth for income and expenses. Every mutation is
//! written through to the ledger file before the call returns, and only
//! takes effect in memory once that write has succeeded.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, Expense, Ledger, Money};

use super::file_io::{read_ledger, write_ledger};

/// File-backed store for the ledger
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    ledger: Ledger,
}

impl LedgerStore {
    /// Create a store bound to `path` holding an empty ledger.
    /// Nothing is read until [`LedgerStore::load`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ledger: Ledger::default(),
        }
    }

    /// Create a store bound to `path` and load it
    pub fn open(path: impl Into<PathBuf>) -> BudgetResult<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current state
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Load the ledger from disk.
    ///
    /// A missing file means a first run and leaves the empty ledger in place.
    /// A file that can't be read or parsed, or that breaks the ledger
    /// invariants, is an error.
    pub fn load(&mut self) -> BudgetResult<()> {
        let Some(ledger) = read_ledger(&self.path)? else {
            debug!(path = %self.path.display(), "no ledger file, starting empty");
            return Ok(());
        };

        debug!(
            path = %self.path.display(),
            expenses = ledger.expenses.len(),
            "loaded ledger"
        );
        self.ledger = ledger;
        Ok(())
    }

    /// Overwrite the backing file with the full ledger
    pub fn persist(&self) -> BudgetResult<()> {
        write_ledger(&self.path, &self.ledger)
    }

    /// Write `next` to disk, then make it the current state
    fn commit(&mut self, next: Ledger) -> BudgetResult<()> {
        write_ledger(&self.path, &next)?;
        self.ledger = next;
        Ok(())
    }

    /// Add to the income total
    pub fn add_income(&mut self, amount: Money) -> BudgetResult<()> {
        ensure_non_negative(amount)?;

        let income = self
            .ledger
            .income
            .checked_add(amount)
            .ok_or_else(BudgetError::amount_too_large)?;
        self.commit(Ledger {
            income,
            ..self.ledger.clone()
        })?;

        info!(%amount, %income, "added income");
        Ok(())
    }

    /// Append an expense.
    ///
    /// The category is stored under its canonical form, the same one it
    /// reloads as: `Custom("rent")` becomes `Rent`, `Custom(" Pets ")` becomes
    /// `Custom("Pets")`.
    pub fn add_expense(
        &mut self,
        description: impl Into<String>,
        amount: Money,
        category: Category,
    ) -> BudgetResult<&Expense> {
        ensure_non_negative(amount)?;

        let expense = Expense::new(description, amount, Category::parse(category.name()));
        let mut next = self.ledger.clone();
        next.expenses.push(expense);
        if next.total_expenses().is_none() {
            return Err(BudgetError::amount_too_large());
        }
        self.commit(next)?;

        let expense = &self.ledger.expenses[self.ledger.expenses.len() - 1];
        info!(
            description = %expense.description,
            %amount,
            category = %expense.category,
            "added expense"
        );
        Ok(expense)
    }

    /// Reset income to zero and drop every expense. Irreversible.
    pub fn clear(&mut self) -> BudgetResult<()> {
        let dropped = self.ledger.expenses.len();
        self.commit(Ledger::default())?;

        info!(expenses = dropped, "cleared ledger");
        Ok(())
    }
}

fn ensure_non_negative(amount: Money) -> BudgetResult<()> {
    if amount.is_negative() {
        return Err(BudgetError::invalid_amount());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> LedgerStore {
        LedgerStore::open(temp_dir.path().join("budget.json")).unwrap()
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        assert!(store.ledger().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_income_accumulates() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);

        let amounts = [100000, 2550, 0, 1];
        for cents in amounts {
            store.add_income(Money::from_cents(cents)).unwrap();
        }

        assert_eq!(store.ledger().income.cents(), amounts.iter().sum::<i64>());
    }

    #[test]
    fn test_expenses_keep_call_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);

        let names = ["rent", "coffee", "bus", "cinema", "coffee"];
        for (i, name) in names.iter().enumerate() {
            store
                .add_expense(*name, Money::from_cents(i as i64 * 100), Category::Other)
                .unwrap();
        }

        let stored: Vec<&str> = store
            .ledger()
            .expenses
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(stored, names);
    }

    #[test]
    fn test_every_mutation_is_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");
        let mut store = LedgerStore::open(&path).unwrap();

        store.add_income(Money::from_cents(100000)).unwrap();
        assert_eq!(LedgerStore::open(&path).unwrap().ledger(), store.ledger());

        store
            .add_expense("rent", Money::from_cents(50000), Category::Rent)
            .unwrap();
        assert_eq!(LedgerStore::open(&path).unwrap().ledger(), store.ledger());
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");

        let mut store = LedgerStore::open(&path).unwrap();
        store.add_income(Money::from_cents(123456)).unwrap();
        store
            .add_expense("groceries", Money::from_cents(8999), Category::Food)
            .unwrap();
        store
            .add_expense("vet", Money::from_cents(4000), Category::Custom("Pets".into()))
            .unwrap();

        let reloaded = LedgerStore::open(&path).unwrap();
        assert_eq!(reloaded.ledger(), store.ledger());
    }

    #[test]
    fn test_clear_then_reload_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");

        let mut store = LedgerStore::open(&path).unwrap();
        store.add_income(Money::from_cents(5000)).unwrap();
        store
            .add_expense("lunch", Money::from_cents(1200), Category::Food)
            .unwrap();
        store.clear().unwrap();

        assert!(path.exists());
        let reloaded = LedgerStore::open(&path).unwrap();
        assert_eq!(reloaded.ledger(), &Ledger::default());
    }

    #[test]
    fn test_negative_amounts_refused() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);

        assert!(store.add_income(Money::from_cents(-500)).is_err());
        assert!(store
            .add_expense("oops", Money::from_cents(-1), Category::Other)
            .is_err());
        assert!(store.ledger().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");
        std::fs::write(&path, "{ income: ").unwrap();

        let err = LedgerStore::open(&path).unwrap_err();
        assert!(matches!(err, BudgetError::Storage(_)));
    }

    #[test]
    fn test_negative_amount_in_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");
        std::fs::write(&path, r#"{"income": -5, "expenses": []}"#).unwrap();

        let err = LedgerStore::open(&path).unwrap_err();
        assert!(err.to_string().contains("Income cannot be negative"));
    }

    #[test]
    fn test_loads_hand_written_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");
        std::fs::write(
            &path,
            r#"{"income": 1000, "expenses": [
                {"description": "rent", "amount": 500.0, "category": "Rent"},
                {"description": "snacks", "amount": 2.5}
            ]}"#,
        )
        .unwrap();

        let store = LedgerStore::open(&path).unwrap();
        assert_eq!(store.ledger().income.cents(), 100000);
        assert_eq!(store.ledger().expenses[1].category, Category::Other);
    }

    #[test]
    fn test_categories_reload_as_stored() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");
        let mut store = LedgerStore::open(&path).unwrap();

        store
            .add_expense("rent", Money::from_cents(50000), Category::Custom("Rent".into()))
            .unwrap();
        store
            .add_expense("vet", Money::from_cents(4000), Category::Custom(" Pets ".into()))
            .unwrap();
        store
            .add_expense("misc", Money::from_cents(100), Category::Custom("  ".into()))
            .unwrap();

        let categories: Vec<&Category> =
            store.ledger().expenses.iter().map(|e| &e.category).collect();
        assert_eq!(
            categories,
            [&Category::Rent, &Category::Custom("Pets".into()), &Category::Other]
        );
        assert_eq!(LedgerStore::open(&path).unwrap().ledger(), store.ledger());
    }

    #[test]
    fn test_totals_past_the_limit_are_refused() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");
        let mut store = LedgerStore::open(&path).unwrap();
        let big = Money::from_cents(900_000_000_000_000);

        store.add_income(big).unwrap();
        store.add_expense("house", big, Category::Rent).unwrap();

        let err = store.add_income(big).unwrap_err();
        assert!(matches!(err, BudgetError::Validation(_)));
        let err = store.add_expense("boat", big, Category::Other).unwrap_err();
        assert!(matches!(err, BudgetError::Validation(_)));

        assert_eq!(store.ledger().income, big);
        assert_eq!(store.ledger().expenses.len(), 1);
        assert_eq!(LedgerStore::open(&path).unwrap().ledger(), store.ledger());
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");
        let mut store = LedgerStore::open(&path).unwrap();
        store.add_income(Money::from_cents(1000)).unwrap();
        let before = store.ledger().clone();

        // A directory at the staging path makes every write fail
        std::fs::create_dir(temp_dir.path().join("budget.json.tmp")).unwrap();

        assert!(store.add_income(Money::from_cents(500)).is_err());
        assert!(store
            .add_expense("lunch", Money::from_cents(1200), Category::Food)
            .is_err());
        assert!(store.clear().is_err());

        assert_eq!(store.ledger(), &before);
        assert_eq!(LedgerStore::open(&path).unwrap().ledger(), &before);
    }
}
