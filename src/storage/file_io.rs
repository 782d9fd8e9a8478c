//! Ledger file I/O
//!
//! The ledger file is read in one piece and replaced in one piece. A new
//! version is first written to `<file>.tmp` in the same directory and then
//! renamed over the ledger, so a write that fails part way leaves the
//! previous ledger readable.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Ledger;

/// Read and check the ledger at `path`. `Ok(None)` means there is no file yet.
pub fn read_ledger(path: &Path) -> BudgetResult<Option<Ledger>> {
    let contents = match fs::read(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(storage_error("Failed to read", path, e)),
    };

    let ledger: Ledger = serde_json::from_slice(&contents)
        .map_err(|e| storage_error("Failed to parse", path, e))?;
    ledger
        .validate()
        .map_err(|e| storage_error("Invalid ledger in", path, e))?;

    debug!(path = %path.display(), bytes = contents.len(), "read ledger file");
    Ok(Some(ledger))
}

/// Replace the ledger file at `path` with `ledger`
pub fn write_ledger(path: &Path, ledger: &Ledger) -> BudgetResult<()> {
    let mut contents = serde_json::to_vec_pretty(ledger)
        .map_err(|e| storage_error("Failed to encode", path, e))?;
    contents.push(b'\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| storage_error("Failed to create directory", parent, e))?;
    }

    let staged = staging_path(path);
    if let Err(e) = stage(&staged, &contents).and_then(|()| fs::rename(&staged, path)) {
        if staged.is_file() {
            let _ = fs::remove_file(&staged);
        }
        return Err(storage_error("Failed to write", path, e));
    }

    debug!(path = %path.display(), bytes = contents.len(), "replaced ledger file");
    Ok(())
}

fn stage(staged: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = File::create(staged)?;
    file.write_all(contents)?;
    file.sync_all()
}

/// `budget.json` -> `budget.json.tmp`
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn storage_error(action: &str, path: &Path, err: impl fmt::Display) -> BudgetError {
    BudgetError::Storage(format!("{} {}: {}", action, path.display(), err))
}
