// Maps leave failures onto HTTP responses with a `{"message": ...}` body.

use axum::{
    Json,
    extract::{Path, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
    response::Response,
};
use serde::Serialize;

use crate::modules::leaves::errors::LeaveError;

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn status_of(error: &LeaveError) -> StatusCode {
    match error {
        LeaveError::NotFound(_) => StatusCode::NOT_FOUND,
        LeaveError::ManagerNotFound(_) | LeaveError::Validation(_) => StatusCode::BAD_REQUEST,
        LeaveError::InsufficientBalance { .. } => StatusCode::FAILED_DEPENDENCY,
        LeaveError::Conflict(_) => StatusCode::CONFLICT,
        LeaveError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(MessageBody {
            message: message.into(),
        }),
    )
        .into_response()
}

pub fn error_response(error: LeaveError) -> Response {
    // backend details stay in the logs
    let text = if error.is_backend() {
        "internal error".to_string()
    } else {
        error.to_string()
    };
    message(status_of(&error), text)
}

pub fn invalid_body() -> Response {
    message(StatusCode::UNPROCESSABLE_ENTITY, "malformed request body")
}

/// Unwraps path parameters, answering 400 with a message body when they do not parse.
pub fn path_params<T>(path: Result<Path<T>, PathRejection>) -> Result<T, Response> {
    match path {
        Ok(Path(params)) => Ok(params),
        Err(rejection) => Err(message(StatusCode::BAD_REQUEST, rejection.body_text())),
    }
}
