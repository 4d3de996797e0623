//! Defines the endpoint for replacing an existing expense.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::{
    AppState, Error,
    expense::{Expense, ExpenseId},
    stores::ExpenseStore,
};

/// A route handler for replacing the expense with the ID in the path, responds with the full
/// updated list of expenses.
pub async fn update_expense_endpoint(
    State(state): State<AppState>,
    Path(expense_id): Path<ExpenseId>,
    payload: Result<Json<Expense>, JsonRejection>,
) -> Result<Json<Vec<Expense>>, Error> {
    let Json(expense) = payload.inspect_err(|rejection| {
        tracing::debug!(
            "Rejected update for expense {expense_id}: {}",
            rejection.body_text()
        );
    })?;

    let mut store = state.lock_store()?;

    update_expense(&expense_id, expense, &mut *store).map(Json)
}

/// Replace the first expense whose ID is `id` with `expense`, keeping its position.
///
/// The ID of `expense` does not have to match `id`, the replacement is stored as given.
///
/// # Errors
/// Returns [Error::ExpenseNotFound] without saving if no expense has the ID `id`, otherwise any
/// error from loading or saving the expenses.
pub fn update_expense(
    id: &str,
    expense: Expense,
    store: &mut dyn ExpenseStore,
) -> Result<Vec<Expense>, Error> {
    let mut expenses = store.load()?;

    let Some(existing) = expenses.iter_mut().find(|existing| existing.id == id) else {
        tracing::debug!("Could not update expense {id}: no expense has that ID");
        return Err(Error::ExpenseNotFound);
    };
    *existing = expense;

    store.save(&expenses)?;
    tracing::info!("Updated expense {id}");

    Ok(expenses)
}
