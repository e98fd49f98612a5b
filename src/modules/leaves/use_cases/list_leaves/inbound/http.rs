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
use crate::modules::leaves::core::status::LeaveStatus;
use crate::modules::leaves::errors::LeaveError;
use crate::shared::core::primitives::{EmployeeId, LeaveId, ManagerId};
use crate::shell::state::AppState;

fn respond(result: Result<Vec<LeaveRecord>, LeaveError>) -> Response {
    match result {
        Ok(records) => {
            let views: Vec<LeaveView> = records.into_iter().map(LeaveView::from).collect();
            Json(views).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub async fn list_all(State(state): State<AppState>) -> impl IntoResponse {
    respond(state.service.list_all().await)
}

pub async fn get_one(
    State(state): State<AppState>,
    path: Result<Path<LeaveId>, PathRejection>,
) -> impl IntoResponse {
    let id = match path_params(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match state.service.get(id).await {
        Ok(record) => Json(LeaveView::from(record)).into_response(),
        Err(error) => error_response(error),
    }
}

/// Body is a bare JSON boolean.
pub async fn list_by_active(
    State(state): State<AppState>,
    body: Result<Json<bool>, JsonRejection>,
) -> impl IntoResponse {
    let Json(active) = match body {
        Ok(b) => b,
        Err(_) => return invalid_body(),
    };
    respond(state.service.list_by_active(active).await)
}

/// Which slice of an employee's requests a route returns.
#[derive(Clone, Copy)]
enum EmployeeView {
    All,
    Decision(bool),
    Active(bool),
}

async fn list_for_employee(
    state: AppState,
    path: Result<Path<EmployeeId>, PathRejection>,
    view: EmployeeView,
) -> Response {
    let employee_id = match path_params(path) {
        Ok(employee_id) => employee_id,
        Err(response) => return response,
    };
    let service = &state.service;
    respond(match view {
        EmployeeView::All => service.list_by_employee(employee_id).await,
        EmployeeView::Decision(accepted) => {
            service
                .list_by_employee_and_decision(employee_id, accepted)
                .await
        }
        EmployeeView::Active(active) => {
            service
                .list_by_employee_and_active(employee_id, active)
                .await
        }
    })
}

pub async fn list_by_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
) -> impl IntoResponse {
    list_for_employee(state, path, EmployeeView::All).await
}

pub async fn list_accepted_by_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
) -> impl IntoResponse {
    list_for_employee(state, path, EmployeeView::Decision(true)).await
}

pub async fn list_rejected_by_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
) -> impl IntoResponse {
    list_for_employee(state, path, EmployeeView::Decision(false)).await
}

pub async fn list_active_by_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
) -> impl IntoResponse {
    list_for_employee(state, path, EmployeeView::Active(true)).await
}

pub async fn list_inactive_by_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
) -> impl IntoResponse {
    list_for_employee(state, path, EmployeeView::Active(false)).await
}

async fn list_for_manager(
    state: AppState,
    path: Result<Path<ManagerId>, PathRejection>,
    status: Option<LeaveStatus>,
) -> Response {
    let manager_id = match path_params(path) {
        Ok(manager_id) => manager_id,
        Err(response) => return response,
    };
    respond(match status {
        None => state.service.list_by_manager(manager_id).await,
        Some(status) => {
            state
                .service
                .list_by_manager_and_status(manager_id, status)
                .await
        }
    })
}

pub async fn list_by_manager(
    State(state): State<AppState>,
    path: Result<Path<ManagerId>, PathRejection>,
) -> impl IntoResponse {
    list_for_manager(state, path, None).await
}

pub async fn list_pending_by_manager(
    State(state): State<AppState>,
    path: Result<Path<ManagerId>, PathRejection>,
) -> impl IntoResponse {
    list_for_manager(state, path, Some(LeaveStatus::Pending)).await
}

pub async fn list_approved_by_manager(
    State(state): State<AppState>,
    path: Result<Path<ManagerId>, PathRejection>,
) -> impl IntoResponse {
    list_for_manager(state, path, Some(LeaveStatus::Accepted)).await
}

pub async fn list_rejected_by_manager(
    State(state): State<AppState>,
    path: Result<Path<ManagerId>, PathRejection>,
) -> impl IntoResponse {
    list_for_manager(state, path, Some(LeaveStatus::Rejected)).await
}
