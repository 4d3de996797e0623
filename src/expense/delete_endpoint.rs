//! Defines the endpoint for deleting an expense.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    expense::{Expense, ExpenseId},
    stores::ExpenseStore,
};

/// A route handler for deleting every expense with the ID in the path, responds with the
/// remaining expenses.
pub async fn delete_expense_endpoint(
    State(state): State<AppState>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Json<Vec<Expense>>, Error> {
    let mut store = state.lock_store()?;

    delete_expense(&expense_id, &mut *store).map(Json)
}

/// Remove every expense whose ID is `id` and return the remaining expenses.
///
/// # Errors
/// Returns [Error::ExpenseNotFound] without saving if no expense has the ID `id`, otherwise any
/// error from loading or saving the expenses.
pub fn delete_expense(id: &str, store: &mut dyn ExpenseStore) -> Result<Vec<Expense>, Error> {
    let expenses = store.load()?;
    let count_before = expenses.len();

    let remaining: Vec<Expense> = expenses
        .into_iter()
        .filter(|expense| expense.id != id)
        .collect();

    let deleted = count_before - remaining.len();
    if deleted == 0 {
        tracing::debug!("Could not delete expense {id}: no expense has that ID");
        return Err(Error::ExpenseNotFound);
    }

    store.save(&remaining)?;
    tracing::info!("Deleted {deleted} expense(s) with the ID {id}");

    Ok(remaining)
}
