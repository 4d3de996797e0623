//! Implements an expense store that keeps the collection in memory.

use crate::{Error, expense::Expense, stores::ExpenseStore};

/// Keeps a copy of the saved collection in memory.
///
/// Nothing is persisted, so this store is mostly useful as a stand-in for
/// [JsonFileStore](crate::JsonFileStore) in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    expenses: Vec<Expense>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `expenses`.
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }
}

impl ExpenseStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Expense>, Error> {
        Ok(self.expenses.clone())
    }

    fn save(&mut self, expenses: &[Expense]) -> Result<(), Error> {
        self.expenses = expenses.to_vec();

        Ok(())
    }
}
