//! Defines the endpoint for creating a new group expense.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// axum's Form cannot decode repeated fields into a Vec, axum_extra's can.
use axum_extra::extract::{Form, FormRejection};

use crate::{
    AppState, Error,
    group_expense::{
        core::GroupExpenseStore, form::GroupExpenseForm, response::GroupExpenseResponse,
    },
    timezone::get_local_date,
};

/// The state needed to create a group expense.
#[derive(Debug, Clone)]
pub struct CreateGroupExpenseState {
    /// The store for group expenses.
    pub group_expense_store: Arc<Mutex<GroupExpenseStore>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateGroupExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            group_expense_store: state.group_expense_store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler for creating a new group expense.
///
/// Responds with 201 Created and the new expense, including its settlements.
/// Nothing is stored if any field is invalid.
pub async fn create_group_expense_endpoint(
    State(state): State<CreateGroupExpenseState>,
    form: Result<Form<GroupExpenseForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!("could not read group expense form: {}", rejection.body_text());
            return Error::from(rejection).into_response();
        }
    };

    let new_expense = match form.validate() {
        Ok(new_expense) => new_expense,
        Err(error) => {
            tracing::debug!("rejected group expense form {form:?}: {error}");
            return error.into_response();
        }
    };

    let Some(today) = get_local_date(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return Error::InvalidTimezoneError(state.local_timezone).into_response();
    };

    let mut store = match state.group_expense_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire group expense store lock: {error}");
            return Error::StoreLockError.into_response();
        }
    };

    match store.create(&new_expense.name, today, new_expense.participants) {
        Ok(expense) => {
            tracing::info!(
                "created group expense {} \"{}\" with {} settlements",
                expense.id,
                expense.name,
                expense.settlements.len()
            );

            (
                StatusCode::CREATED,
                Json(GroupExpenseResponse::from(expense)),
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("could not create group expense: {error}");
            error.into_response()
        }
    }
}
