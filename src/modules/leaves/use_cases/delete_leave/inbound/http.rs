use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::leaves::adapters::inbound::http_errors::{
    error_response, message, path_params,
};
use crate::modules::leaves::errors::LeaveError;
use crate::shared::core::primitives::LeaveId;
use crate::shell::state::AppState;

/// A missing record still answers 200, carrying the not-found message.
pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<LeaveId>, PathRejection>,
) -> impl IntoResponse {
    let id = match path_params(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match state.service.delete(id).await {
        Ok(()) => message(StatusCode::OK, "Leave successfully deleted"),
        Err(error @ LeaveError::NotFound(_)) => message(StatusCode::OK, error.to_string()),
        Err(error) => error_response(error),
    }
}
