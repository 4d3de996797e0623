//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body is not a valid expense, e.g., a field is missing, has
    /// the wrong type, or the category is not one of the known categories.
    ///
    /// The string describes the offending field and is shown to the client.
    #[error("{0}")]
    InvalidExpense(String),

    /// No expense has the ID given in the request path.
    #[error("Expense not found")]
    ExpenseNotFound,

    /// The expense file exists but does not hold a valid list of expenses.
    ///
    /// The file is never overwritten when this happens so that the data can
    /// be recovered by hand.
    #[error("the stored expenses could not be parsed: {0}")]
    StorageCorrupt(String),

    /// The expense file exists but could not be read.
    #[error("could not read the stored expenses: {0}")]
    StorageRead(String),

    /// The expenses could not be written, e.g., the disk is full or the
    /// process lacks permission to write the file.
    #[error("could not save the expenses: {0}")]
    StorageWrite(String),

    /// Could not acquire the store lock
    #[error("could not acquire the store lock")]
    StoreLockError,
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidExpense(rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Error::InvalidExpense(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            Error::ExpenseNotFound => (StatusCode::NOT_FOUND, Error::ExpenseNotFound.to_string()),
            // Storage errors are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_owned(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
