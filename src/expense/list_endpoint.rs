//! Defines the endpoint for listing all expenses.

use axum::{Json, extract::State};

use crate::{AppState, Error, expense::Expense};

/// A route handler that responds with every stored expense, in stored order.
pub async fn list_expenses_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<Expense>>, Error> {
    let store = state.lock_store()?;

    store.load().map(Json)
}
