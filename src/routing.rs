//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    group_expense::{
        create_group_expense_endpoint, delete_group_expense_endpoint, get_group_expense_endpoint,
        list_group_expenses_endpoint, settle_endpoint,
    },
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(get_health))
        .route(
            endpoints::GROUP_EXPENSES,
            get(list_group_expenses_endpoint).post(create_group_expense_endpoint),
        )
        .route(
            endpoints::GROUP_EXPENSE,
            get(get_group_expense_endpoint).delete(delete_group_expense_endpoint),
        )
        .route(endpoints::SETTLEMENTS, post(settle_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}

async fn get_health() -> &'static str {
    "ok"
}
