//! Plain-text summary export
//!
//! A [`SummaryView`] remembers the last summary rendered in a session so it
//! can be written out verbatim. Exporting before anything has been rendered
//! is refused.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::reports::Summary;
use crate::storage::LedgerStore;

/// The summary most recently shown to the user
#[derive(Debug, Clone, Default)]
pub struct SummaryView {
    rendered: Option<String>,
}

impl SummaryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate and remember a summary of the store's current state
    pub fn render(&mut self, store: &LedgerStore, currency_symbol: &str) -> BudgetResult<&str> {
        let text = Summary::generate(store.ledger())?.render(currency_symbol);
        Ok(self.rendered.insert(text).as_str())
    }

    /// The remembered summary, if one has been rendered
    pub fn text(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    /// Forget the remembered summary (after the ledger is cleared)
    pub fn reset(&mut self) {
        self.rendered = None;
    }

    /// Write the remembered summary to `path`.
    ///
    /// `default_extension` is appended when `path` has no extension.
    /// Returns the path actually written.
    pub fn export(&self, path: &Path, default_extension: &str) -> BudgetResult<PathBuf> {
        let text = self
            .rendered
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or(BudgetError::NoSummary)?;

        let target = with_default_extension(path, default_extension);
        write_text(&target, text)?;

        info!(path = %target.display(), "exported summary");
        Ok(target)
    }
}

/// Write `text` to `path` exactly as given
pub fn write_text(path: &Path, text: &str) -> BudgetResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            return Err(BudgetError::Export(format!(
                "Directory does not exist: {}",
                parent.display()
            )));
        }
    }

    fs::write(path, text).map_err(|e| {
        BudgetError::Export(format!("Failed to write {}: {}", path.display(), e))
    })
}

fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    let extension = extension.trim_start_matches('.');
    if path.extension().is_some() || extension.is_empty() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}
