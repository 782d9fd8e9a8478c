//! Reports
//!
//! Read-only views derived from the ledger.

pub mod summary;

pub use summary::{CategoryTotal, Summary};
