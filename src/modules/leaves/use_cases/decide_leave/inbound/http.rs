use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};

use crate::modules::leaves::adapters::inbound::http_errors::{error_response, path_params};
use crate::modules::leaves::core::record::LeaveView;
use crate::shared::core::primitives::LeaveId;
use crate::shell::state::AppState;

pub async fn accept(
    State(state): State<AppState>,
    path: Result<Path<LeaveId>, PathRejection>,
) -> impl IntoResponse {
    decide(state, path, true).await
}

pub async fn reject(
    State(state): State<AppState>,
    path: Result<Path<LeaveId>, PathRejection>,
) -> impl IntoResponse {
    decide(state, path, false).await
}

async fn decide(
    state: AppState,
    path: Result<Path<LeaveId>, PathRejection>,
    accepted: bool,
) -> Response {
    let id = match path_params(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match state.service.decide(id, accepted).await {
        Ok(record) => Json(LeaveView::from(record)).into_response(),
        Err(error) => error_response(error),
    }
}
