//! Storage layer
//!
//! JSON file storage for the ledger with whole-file, write-through persistence.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_ledger, write_ledger};
pub use ledger::LedgerStore;
