//! Contains the trait and implementations for objects that store the
//! [expenses](crate::Expense).

mod expense;
mod json_file;
mod memory;

pub use expense::ExpenseStore;
pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
