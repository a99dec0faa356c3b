//! Defines the endpoint for settling an expense without storing it.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    group_expense::{
        form::validate_participants,
        settlement::{Participant, SettlementPlan},
    },
};

/// The JSON body for a settlement request.
#[derive(Debug, Serialize, Deserialize)]
pub struct SettleRequest {
    /// The people sharing the expense and what each of them spent.
    pub participants: Vec<Participant>,
}

/// A route handler that computes the settlement plan for the participants in
/// the request body.
pub async fn settle_endpoint(body: Result<Json<SettleRequest>, JsonRejection>) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!("could not read settlement request: {}", rejection.body_text());
            return Error::from(rejection).into_response();
        }
    };

    let plan = validate_participants(&request.participants)
        .and_then(|()| SettlementPlan::new(&request.participants));

    match plan {
        Ok(plan) => Json(plan).into_response(),
        Err(error) => {
            tracing::debug!("could not settle {:?}: {error}", request.participants);
            error.into_response()
        }
    }
}
