//! Export module
//!
//! Writes rendered summaries to user-chosen text files.

pub mod text;

pub use text::{write_text, SummaryView};
