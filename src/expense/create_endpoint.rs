//! Defines the endpoint for creating a new expense.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{AppState, Error, expense::Expense, stores::ExpenseStore};

/// A route handler for adding an expense, responds with the full updated list of expenses.
///
/// Invalid request bodies are rejected with [Error::InvalidExpense] before the store is touched.
pub async fn create_expense_endpoint(
    State(state): State<AppState>,
    payload: Result<Json<Expense>, JsonRejection>,
) -> Result<Json<Vec<Expense>>, Error> {
    let Json(expense) = payload.inspect_err(|rejection| {
        tracing::debug!("Rejected new expense: {}", rejection.body_text());
    })?;

    let mut store = state.lock_store()?;

    create_expense(expense, &mut *store).map(Json)
}

/// Append `expense` to the stored expenses and return the updated list.
///
/// No duplicate check is done on the expense ID.
///
/// # Errors
/// Returns any error from loading or saving the expenses. If saving fails the
/// updated list is not returned since it does not match what is stored.
pub fn create_expense(
    expense: Expense,
    store: &mut dyn ExpenseStore,
) -> Result<Vec<Expense>, Error> {
    let mut expenses = store.load()?;
    let id = expense.id.clone();
    expenses.push(expense);

    store.save(&expenses)?;
    tracing::info!("Created expense {id}, {} expenses stored", expenses.len());

    Ok(expenses)
}

#[cfg(test)]
mod tests {
    use axum::{Json, extract::State};

    use crate::{
        AppState, Error,
        expense::{Category, Expense, create_expense, create_expense_endpoint},
        stores::{ExpenseStore, InMemoryStore},
        test_utils::{FailingStore, SpyStore, StoreCall, expense, expense_in_category},
    };

    #[tokio::test]
    async fn can_create_expense() {
        let state = AppState::new(InMemoryStore::new());
        let want = Expense {
            id: "1".to_owned(),
            amount: 12.5,
            category: Category::Food,
            description: Some("Sushi".to_owned()),
            date: "2024-01-01".to_owned(),
        };

        let Json(got) = create_expense_endpoint(State(state.clone()), Ok(Json(want.clone())))
            .await
            .unwrap();

        assert_eq!(got, vec![want.clone()]);
        assert_eq!(state.lock_store().unwrap().load(), Ok(vec![want]));
    }

    #[test]
    fn appends_to_end_of_existing_expenses() {
        let existing = vec![expense("a", 1.0), expense("b", 2.0)];
        let mut store = InMemoryStore::with_expenses(existing.clone());
        let new_expense = expense_in_category("c", 3.0, Category::Transport);

        let got = create_expense(new_expense.clone(), &mut store).unwrap();

        let mut want = existing;
        want.push(new_expense);
        assert_eq!(got, want);
        assert_eq!(store.load(), Ok(want));
    }

    #[test]
    fn allows_duplicate_ids() {
        let mut store = InMemoryStore::with_expenses(vec![expense("1", 1.0)]);

        let got = create_expense(expense("1", 5.0), &mut store).unwrap();

        assert_eq!(got, vec![expense("1", 1.0), expense("1", 5.0)]);
    }

    #[test]
    fn loads_then_saves_once() {
        let mut store = SpyStore::default();
        let new_expense = expense("1", 1.0);

        create_expense(new_expense.clone(), &mut store).unwrap();

        assert_eq!(
            store.calls(),
            vec![StoreCall::Load, StoreCall::Save(vec![new_expense])]
        );
    }

    #[test]
    fn returns_error_instead_of_unsaved_expenses() {
        let mut store = FailingStore::failing_save(vec![expense("1", 1.0)]);

        let result = create_expense(expense("2", 2.0), &mut store);

        assert!(
            matches!(result, Err(Error::StorageWrite(_))),
            "got {result:?}, want StorageWrite"
        );
    }

    #[test]
    fn does_not_overwrite_corrupt_storage() {
        let mut store = FailingStore {
            load_error: Some(Error::StorageCorrupt("EOF while parsing".to_owned())),
            save_error: Some(Error::StorageWrite("save should not be called".to_owned())),
            ..Default::default()
        };

        let result = create_expense(expense("1", 1.0), &mut store);

        assert!(matches!(result, Err(Error::StorageCorrupt(_))));
    }
}
