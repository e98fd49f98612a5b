use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::leaves::adapters::inbound::http_errors::{error_response, invalid_body};
use crate::modules::leaves::core::record::{LeaveType, LeaveView};
use crate::modules::leaves::use_cases::submit_leave::command::SubmitLeave;
use crate::shared::core::primitives::{Days, EmployeeId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitLeaveBody {
    pub employee_id: EmployeeId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub requested_days: Days,
    #[serde(default)]
    pub leave_type: LeaveType,
    pub reason: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitLeaveBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return invalid_body(),
    };

    let command = SubmitLeave {
        employee_id: body.employee_id,
        start_date: body.start_date,
        end_date: body.end_date,
        requested_days: body.requested_days,
        leave_type: body.leave_type,
        reason: body.reason,
    };

    match state.service.submit(command).await {
        Ok(record) => (StatusCode::CREATED, Json(LeaveView::from(record))).into_response(),
        Err(error) => error_response(error),
    }
}
