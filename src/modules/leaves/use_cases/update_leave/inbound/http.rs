use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::{IntoResponse, Response},
};

use crate::modules::leaves::adapters::inbound::http_errors::{
    error_response, invalid_body, path_params,
};
use crate::modules::leaves::core::record::{LeaveRecord, LeaveView};
use crate::modules::leaves::errors::LeaveError;
use crate::modules::leaves::use_cases::update_leave::command::LeavePatch;
use crate::shared::core::primitives::{EmployeeId, LeaveId};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<LeaveId>, PathRejection>,
    body: Result<Json<LeavePatch>, JsonRejection>,
) -> impl IntoResponse {
    let id = match path_params(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return invalid_body(),
    };
    respond(state.service.update_fields(id, patch).await)
}

pub async fn handle_for_employee(
    State(state): State<AppState>,
    path: Result<Path<(EmployeeId, LeaveId)>, PathRejection>,
    body: Result<Json<LeavePatch>, JsonRejection>,
) -> impl IntoResponse {
    let (employee_id, id) = match path_params(path) {
        Ok(params) => params,
        Err(response) => return response,
    };
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return invalid_body(),
    };
    respond(
        state
            .service
            .update_for_employee(employee_id, id, patch)
            .await,
    )
}

fn respond(result: Result<LeaveRecord, LeaveError>) -> Response {
    match result {
        Ok(record) => Json(LeaveView::from(record)).into_response(),
        Err(error) => error_response(error),
    }
}
