//! Defines the expense store trait.

use std::fmt::Debug;

use crate::{Error, expense::Expense};

/// Reads and writes the entire collection of expenses.
///
/// There is no per-expense addressing: callers load everything, change the
/// collection in memory and save everything back.
pub trait ExpenseStore: Debug + Send {
    /// Read the full collection of expenses, in the order they were saved.
    ///
    /// A store that has never been saved to holds no expenses, which is not
    /// an error.
    ///
    /// # Errors
    /// Returns [Error::StorageCorrupt] if the stored data is not a valid list
    /// of expenses, or [Error::StorageRead] if it could not be read.
    fn load(&self) -> Result<Vec<Expense>, Error>;

    /// Replace the stored collection with `expenses`.
    ///
    /// Readers must never observe a partially written collection.
    ///
    /// # Errors
    /// Returns [Error::StorageWrite] if the collection could not be written.
    fn save(&mut self, expenses: &[Expense]) -> Result<(), Error>;
}
