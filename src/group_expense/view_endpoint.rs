//! Defines the endpoints for reading group expenses.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    group_expense::{
        core::{GroupExpenseId, GroupExpenseStore},
        response::GroupExpenseResponse,
    },
};

/// The state needed to read or delete group expenses.
#[derive(Debug, Clone)]
pub struct GroupExpenseState {
    /// The store for group expenses.
    pub group_expense_store: Arc<Mutex<GroupExpenseStore>>,
}

impl FromRef<AppState> for GroupExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            group_expense_store: state.group_expense_store.clone(),
        }
    }
}

/// A route handler that lists every group expense, most recent first.
pub async fn list_group_expenses_endpoint(State(state): State<GroupExpenseState>) -> Response {
    let expenses = match state.group_expense_store.lock() {
        Ok(store) => store.list(),
        Err(error) => {
            tracing::error!("could not acquire group expense store lock: {error}");
            return Error::StoreLockError.into_response();
        }
    };

    let expenses: Vec<GroupExpenseResponse> = expenses
        .into_iter()
        .map(GroupExpenseResponse::from)
        .collect();

    Json(expenses).into_response()
}

/// A route handler that gets a single group expense with its totals and settlements.
pub async fn get_group_expense_endpoint(
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

    let expense = match state.group_expense_store.lock() {
        Ok(store) => store.get(expense_id),
        Err(error) => {
            tracing::error!("could not acquire group expense store lock: {error}");
            return Error::StoreLockError.into_response();
        }
    };

    match expense {
        Ok(expense) => Json(GroupExpenseResponse::from(expense)).into_response(),
        Err(error) => {
            tracing::debug!("could not get group expense {expense_id}: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        body::to_bytes,
        extract::{Path, State},
        http::StatusCode,
    };
    use time::macros::date;

    use crate::group_expense::{
        core::GroupExpenseStore,
        response::GroupExpenseResponse,
        settlement::Participant,
        view_endpoint::{
            GroupExpenseState, get_group_expense_endpoint, list_group_expenses_endpoint,
        },
    };

    fn get_test_state() -> GroupExpenseState {
        let mut store = GroupExpenseStore::new();
        store
            .create(
                "Lunch",
                date!(2025 - 03 - 01),
                vec![Participant::new("A", 20.0), Participant::new("B", 0.0)],
            )
            .unwrap();
        store
            .create(
                "Dinner",
                date!(2025 - 03 - 02),
                vec![Participant::new("C", 5.0), Participant::new("D", 5.0)],
            )
            .unwrap();

        GroupExpenseState {
            group_expense_store: Arc::new(Mutex::new(store)),
        }
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let response = list_group_expenses_endpoint(State(get_test_state())).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let got: Vec<GroupExpenseResponse> = serde_json::from_slice(&body).unwrap();
        let names: Vec<&str> = got.iter().map(|expense| expense.name.as_str()).collect();
        assert_eq!(names, vec!["Dinner", "Lunch"]);
    }

    #[tokio::test]
    async fn gets_expense_by_id() {
        let response = get_group_expense_endpoint(State(get_test_state()), Ok(Path(1))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let got: GroupExpenseResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(got.name, "Lunch");
        assert_eq!(got.fair_share, 10.0);
        assert_eq!(got.settlements.len(), 1);
    }

    #[tokio::test]
    async fn missing_expense_is_not_found() {
        let response = get_group_expense_endpoint(State(get_test_state()), Ok(Path(99))).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
