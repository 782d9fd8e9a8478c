//! Expense categories
//!
//! A small fixed set of well-known categories plus free text. Free text that
//! matches a well-known name (ignoring case) resolves to that category, and
//! blank text resolves to `Other`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category an expense is filed under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Rent,
    Utilities,
    Transport,
    Entertainment,
    #[default]
    Other,
    /// A user-defined category name
    Custom(String),
}

impl Category {
    /// The fixed categories, in the order they are offered to the user
    pub const FIXED: [Category; 6] = [
        Category::Food,
        Category::Rent,
        Category::Utilities,
        Category::Transport,
        Category::Entertainment,
        Category::Other,
    ];

    /// Resolve user text to a category
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() {
            return Category::Other;
        }

        Self::FIXED
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .cloned()
            .unwrap_or_else(|| Category::Custom(name.to_string()))
    }

    /// Display name, as stored in the ledger file
    pub fn name(&self) -> &str {
        match self {
            Category::Food => "Food",
            Category::Rent => "Rent",
            Category::Utilities => "Utilities",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
            Category::Custom(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Category::parse(&name)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Custom(name) => name,
            fixed => fixed.name().to_string(),
        }
    }
}
