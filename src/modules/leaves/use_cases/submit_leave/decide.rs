// Pure decision function for submission.
//
// Responsibilities
// - Enforce the period rules (start on or before end, at least one day).
// - Produce a Pending record carrying the id reserved by the store.
// - Never perform input or output.

use crate::modules::leaves::core::record::{LeaveRecord, ValidationError, validate_period};
use crate::modules::leaves::core::status::LeaveStatus;
use crate::modules::leaves::use_cases::submit_leave::command::SubmitLeave;
use crate::shared::core::primitives::LeaveId;

pub fn decide_submit(
    command: SubmitLeave,
    id: LeaveId,
    created_at: i64,
) -> Result<LeaveRecord, ValidationError> {
    validate_period(command.start_date, command.end_date, command.requested_days)?;
    Ok(LeaveRecord {
        id,
        employee_id: command.employee_id,
        start_date: command.start_date,
        end_date: command.end_date,
        requested_days: command.requested_days,
        leave_type: command.leave_type,
        reason: command.reason,
        status: LeaveStatus::Pending,
        created_at,
        decided_at: None,
        version: 0,
    })
}
