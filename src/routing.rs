//! Application router configuration.

use axum::{
    Json, Router,
    routing::{get, put},
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;

use crate::{
    AppState, endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, list_expenses_endpoint,
        update_expense_endpoint,
    },
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
///
/// Every route accepts cross-origin requests from any origin, with any method
/// and header.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(get_health))
        .route(endpoints::API_HEALTH, get(get_health))
        .route(
            endpoints::EXPENSES,
            get(list_expenses_endpoint).post(create_expense_endpoint),
        )
        .route(
            endpoints::EXPENSE,
            put(update_expense_endpoint).delete(delete_expense_endpoint),
        )
        .fallback(get_404_not_found)
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn get_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
