mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod update_endpoint;

pub use core::{Category, Expense, ExpenseId};
pub use create_endpoint::{create_expense, create_expense_endpoint};
pub use delete_endpoint::{delete_expense, delete_expense_endpoint};
pub use list_endpoint::list_expenses_endpoint;
pub use update_endpoint::{update_expense, update_expense_endpoint};
