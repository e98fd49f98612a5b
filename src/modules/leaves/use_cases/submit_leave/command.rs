// Command data type for submitting a leave request.
//
// Purpose
// - Express an employee's intent to take `requested_days` of leave between two dates.
//
// Responsibilities
// - Carry input data for the decider to validate and turn into a Pending record.
// - Be independent of transport layer details.

use crate::modules::leaves::core::record::LeaveType;
use crate::shared::core::primitives::{Days, EmployeeId};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitLeave {
    pub employee_id: EmployeeId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub requested_days: Days,
    pub leave_type: LeaveType,
    pub reason: Option<String>,
}
