use axum::{
    Router,
    routing::{get, post, put},
};

use crate::modules::leaves::use_cases::decide_leave::inbound::http as decide_http;
use crate::modules::leaves::use_cases::delete_leave::inbound::http as delete_http;
use crate::modules::leaves::use_cases::list_leaves::inbound::http as list_http;
use crate::modules::leaves::use_cases::submit_leave::inbound::http as submit_http;
use crate::modules::leaves::use_cases::update_leave::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/leave", get(list_http::list_all).post(submit_http::handle))
        .route("/leave/active", post(list_http::list_by_active))
        .route(
            "/leave/{id}",
            get(list_http::get_one)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .route("/leave/{id}/accept", post(decide_http::accept))
        .route("/leave/{id}/reject", post(decide_http::reject))
        .route(
            "/employee/{employee_id}/leave",
            get(list_http::list_by_employee),
        )
        .route(
            "/employee/{employee_id}/leave/accepted",
            get(list_http::list_accepted_by_employee),
        )
        .route(
            "/employee/{employee_id}/leave/rejected",
            get(list_http::list_rejected_by_employee),
        )
        .route(
            "/employee/{employee_id}/leave/active",
            get(list_http::list_active_by_employee),
        )
        .route(
            "/employee/{employee_id}/leave/inactive",
            get(list_http::list_inactive_by_employee),
        )
        .route(
            "/employee/{employee_id}/leave/{id}",
            put(update_http::handle_for_employee),
        )
        .route("/manager/{manager_id}/leave", get(list_http::list_by_manager))
        .route("/manager/{manager_id}/leaves", get(list_http::list_by_manager))
        .route(
            "/manager/{manager_id}/leave/pending",
            get(list_http::list_pending_by_manager),
        )
        .route(
            "/manager/{manager_id}/leave/approved",
            get(list_http::list_approved_by_manager),
        )
        .route(
            "/manager/{manager_id}/leave/rejected",
            get(list_http::list_rejected_by_manager),
        )
        .with_state(state)
}
