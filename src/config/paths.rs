//! Path management for the budget tracker
//!
//! ## Ledger File Resolution Order
//!
//! 1. An explicit path (the `--file` flag, or `BUDGET_FILE` via clap's `env`)
//! 2. `budget.json` in the current working directory
//!
//! The settings file always sits next to the ledger file, sharing its stem:
//! `budget.json` pairs with `budget.settings.json`.

use std::path::{Path, PathBuf};

use crate::error::BudgetError;

/// Default ledger file name
pub const DEFAULT_LEDGER_FILE: &str = "budget.json";

/// Manages the paths used by the budget tracker
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    ledger_file: PathBuf,
}

impl BudgetPaths {
    /// Resolve paths from an optional explicit ledger file
    pub fn new(ledger_file: Option<PathBuf>) -> Self {
        Self {
            ledger_file: ledger_file.unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_FILE)),
        }
    }

    /// Path to the ledger JSON file
    pub fn ledger_file(&self) -> &Path {
        &self.ledger_file
    }

    /// Path to the settings file beside the ledger
    pub fn settings_file(&self) -> PathBuf {
        let stem = self
            .ledger_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "budget".to_string());
        self.ledger_file
            .with_file_name(format!("{}.settings.json", stem))
    }

    /// Create the directory holding the ledger if it is missing
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        match self.ledger_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent).map_err(|e| {
                    BudgetError::Io(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for BudgetPaths {
    fn default() -> Self {
        Self::new(None)
    }
}
