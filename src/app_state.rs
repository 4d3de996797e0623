//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, stores::ExpenseStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store holding the expense collection.
    ///
    /// Request handlers hold the lock for their entire load, modify and save
    /// sequence, so concurrent requests cannot overwrite each other's changes.
    pub store: Arc<Mutex<dyn ExpenseStore>>,
}

impl AppState {
    /// Create a new [AppState] that reads and writes expenses with `store`.
    pub fn new(store: impl ExpenseStore + 'static) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Acquire exclusive access to the expense store.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if a previous holder of the lock panicked.
    pub fn lock_store(&self) -> Result<MutexGuard<'_, dyn ExpenseStore + 'static>, Error> {
        self.store.lock().map_err(|error| {
            tracing::error!("could not acquire store lock: {error}");
            Error::StoreLockError
        })
    }
}
