use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The caller supplied identifier of an expense.
///
/// IDs are not generated or checked for uniqueness by the server.
pub type ExpenseId = String;

/// The fixed set of categories an expense may belong to.
///
/// Deserializing any other string fails, so an unknown category never makes
/// it past the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Groceries, eating out, etc.
    Food,
    /// Public transport, fuel, etc.
    Transport,
    /// Power, water, internet, etc.
    Utilities,
    /// Movies, concerts, games, etc.
    Entertainment,
    /// Anything that does not fit the other categories.
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Entertainment,
        Category::Other,
    ];

    /// The name used for the category on the wire and on disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single financial record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The caller supplied ID.
    pub id: ExpenseId,
    /// The amount spent. No sign or currency is enforced.
    pub amount: f64,
    /// What the money was spent on.
    pub category: Category,
    /// Optional free text. Serialized as `null` when absent.
    #[serde(default)]
    pub description: Option<String>,
    /// When the expense happened, kept as opaque text.
    pub date: String,
}
