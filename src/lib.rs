//! An expense tracker that keeps a list of expenses in a JSON file.
//!
//! This library provides a JSON REST API for listing, creating, updating and
//! deleting expenses. Every request reads the whole list from the
//! [store](ExpenseStore), and every change writes the whole list back and
//! responds with it.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
pub mod endpoints;
mod error;
mod expense;
mod logging;
mod not_found;
mod routing;
pub mod stores;
#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use error::Error;
pub use expense::{Category, Expense, ExpenseId};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use stores::{ExpenseStore, InMemoryStore, JsonFileStore};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
