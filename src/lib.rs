//! Settle Up is a service for splitting group expenses.
//!
//! Everyone in a group records what they paid towards a shared expense and
//! Settle Up works out who should pay whom so that everyone ends up paying
//! the same amount.
//!
//! This library provides the settlement calculator, an in-memory register of
//! group expenses, and a REST API that serves JSON.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::FormRejection;
use axum_server::Handle;
use serde::{Deserialize, Serialize};
use tokio::signal;

mod app_state;
mod csv_input;
mod currency;
pub mod endpoints;
mod group_expense;
mod logging;
mod not_found;
mod routing;
mod timezone;

pub use app_state::AppState;
pub use csv_input::parse_participants_csv;
pub use currency::format_currency;
pub use group_expense::{
    Balance, GroupExpense, GroupExpenseId, GroupExpenseStore, Participant, SETTLEMENT_THRESHOLD,
    Settlement, SettlementPlan, balances, compute_settlements, fair_share, parse_amount,
    total_spent, validate_participants,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use timezone::get_local_offset;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
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

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The input cannot be settled, e.g., there are no participants to split
    /// an expense between.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An empty string was used as the name of a group expense.
    #[error("the expense name cannot be empty")]
    EmptyExpenseName,

    /// A participant was given without a name.
    ///
    /// Holds the one-based position of the participant in the submitted list.
    #[error("participant {0} has no name")]
    MissingParticipantName(usize),

    /// An amount was blank or could not be parsed as a finite number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// An amount was negative. Participants can only report what they paid.
    #[error("{0} is negative, amounts spent must be zero or more")]
    NegativeAmount(String),

    /// Two participants in the same group expense share a name.
    #[error("the participant \"{0}\" was entered more than once")]
    DuplicateParticipantName(String),

    /// The request could not be read, e.g., the body had the wrong content
    /// type or a field had the wrong type.
    #[error("{0}")]
    InvalidRequest(String),

    /// The CSV had issues that prevented it from being parsed.
    #[error("could not parse the CSV data: {0}")]
    InvalidCSV(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to delete a group expense that does not exist.
    #[error("tried to delete a group expense that does not exist")]
    DeleteMissingGroupExpense,

    /// Could not acquire the lock on the group expense store.
    #[error("could not acquire the group expense store lock")]
    StoreLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

/// The JSON body sent to clients when a request fails.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// A short summary of what went wrong.
    pub error: String,
    /// What went wrong and, where possible, how to fix it.
    pub details: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, error) = match &self {
            Error::InvalidInput(_)
            | Error::EmptyExpenseName
            | Error::MissingParticipantName(_)
            | Error::InvalidAmount(_)
            | Error::NegativeAmount(_)
            | Error::DuplicateParticipantName(_)
            | Error::InvalidCSV(_) => (StatusCode::BAD_REQUEST, "Invalid group expense"),
            Error::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "Invalid request"),
            Error::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            Error::DeleteMissingGroupExpense => {
                (StatusCode::NOT_FOUND, "Could not delete group expense")
            }
            Error::InvalidTimezoneError(timezone) => {
                tracing::error!("Could not get local timezone \"{timezone}\"");
                return render_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Invalid Timezone Settings",
                    &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                        ensure the timezone has been set to valid, canonical timezone string"
                    ),
                );
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                return render_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                );
            }
        };

        render_error(status_code, error, &self.to_string())
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

impl From<FormRejection> for Error {
    fn from(rejection: FormRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

fn render_error(status_code: StatusCode, error: &str, details: &str) -> Response {
    (
        status_code,
        Json(ErrorResponse {
            error: error.to_owned(),
            details: details.to_owned(),
        }),
    )
        .into_response()
}
