use crate::expense::{Category, Expense};

/// An expense in the `Food` category with no description.
pub(crate) fn expense(id: &str, amount: f64) -> Expense {
    expense_in_category(id, amount, Category::Food)
}

pub(crate) fn expense_in_category(id: &str, amount: f64, category: Category) -> Expense {
    Expense {
        id: id.to_owned(),
        amount,
        category,
        description: None,
        date: "2024-01-01".to_owned(),
    }
}
