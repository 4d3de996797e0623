use std::sync::{Arc, Mutex};

use crate::{
    Error,
    expense::Expense,
    stores::{ExpenseStore, InMemoryStore},
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StoreCall {
    Load,
    Save(Vec<Expense>),
}

/// An in-memory store that records every call made to it.
// Use Arc Mutex so that clones of the store share state and can be passed into async route
// handlers.
#[derive(Debug, Clone, Default)]
pub(crate) struct SpyStore {
    pub(crate) calls: Arc<Mutex<Vec<StoreCall>>>,
    inner: Arc<Mutex<InMemoryStore>>,
}

impl SpyStore {
    pub(crate) fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            calls: Arc::default(),
            inner: Arc::new(Mutex::new(InMemoryStore::with_expenses(expenses))),
        }
    }

    pub(crate) fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn save_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, StoreCall::Save(_)))
            .count()
    }

    pub(crate) fn expenses(&self) -> Vec<Expense> {
        self.inner.lock().unwrap().load().unwrap()
    }
}

impl ExpenseStore for SpyStore {
    fn load(&self) -> Result<Vec<Expense>, Error> {
        self.calls.lock().unwrap().push(StoreCall::Load);
        self.inner.lock().unwrap().load()
    }

    fn save(&mut self, expenses: &[Expense]) -> Result<(), Error> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Save(expenses.to_vec()));
        self.inner.lock().unwrap().save(expenses)
    }
}

/// A store that loads `expenses` but fails with `load_error` or `save_error` when set.
#[derive(Debug, Clone, Default)]
pub(crate) struct FailingStore {
    pub(crate) expenses: Vec<Expense>,
    pub(crate) load_error: Option<Error>,
    pub(crate) save_error: Option<Error>,
}

impl FailingStore {
    pub(crate) fn failing_load(error: Error) -> Self {
        Self {
            load_error: Some(error),
            ..Default::default()
        }
    }

    pub(crate) fn failing_save(expenses: Vec<Expense>) -> Self {
        Self {
            expenses,
            save_error: Some(Error::StorageWrite("no space left on device".to_owned())),
            ..Default::default()
        }
    }
}

impl ExpenseStore for FailingStore {
    fn load(&self) -> Result<Vec<Expense>, Error> {
        match &self.load_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.expenses.clone()),
        }
    }

    fn save(&mut self, _expenses: &[Expense]) -> Result<(), Error> {
        match &self.save_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
