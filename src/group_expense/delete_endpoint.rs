//! Defines the endpoint for deleting a group expense.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    group_expense::{core::GroupExpenseId, view_endpoint::GroupExpenseState},
};

/// A route handler for deleting a group expense, responds with 204 No Content on success.
pub async fn delete_group_expense_endpoint(
    State(state): State<GroupExpenseState>,
    expense_id: Result<Path<GroupExpenseId>, PathRejection>,
) -> Response {
    let expense_id = match expense_id {
        Ok(Path(expense_id)) => expense_id,
        Err(rejection) => {
            tracing::debug!("could not read group expense ID: {}", rejection.body_text());
            return Error::from(rejection).into_response();
        }
    };

    let mut store = match state.group_expense_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire group expense store lock: {error}");
            return Error::StoreLockError.into_response();
        }
    };

    match store.delete(expense_id) {
        Ok(()) => {
            tracing::info!("deleted group expense {expense_id}");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(error) => {
            tracing::debug!("could not delete group expense {expense_id}: {error}");
            error.into_response()
        }
    }
}
