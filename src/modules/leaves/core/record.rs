// LeaveRecord is the canonical leave request owned by the record store.
//
// Boundaries
// - This file must not perform input or output.
// - `LeaveView` is the only serialised shape; it re-derives the legacy flag pair from `status`.

use crate::modules::leaves::core::status::LeaveStatus;
use crate::shared::core::primitives::{Days, EmployeeId, LeaveId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    #[default]
    Annual,
    Sick,
    Unpaid,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("requested days must be greater than zero")]
    NonPositiveDays,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRecord {
    pub id: LeaveId,
    pub employee_id: EmployeeId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub requested_days: Days,
    pub leave_type: LeaveType,
    pub reason: Option<String>,
    pub status: LeaveStatus,
    pub created_at: i64,
    pub decided_at: Option<i64>,
    pub version: u64,
}

impl LeaveRecord {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_period(self.start_date, self.end_date, self.requested_days)
    }
}

pub fn validate_period(
    start_date: NaiveDate,
    end_date: NaiveDate,
    requested_days: Days,
) -> Result<(), ValidationError> {
    if start_date > end_date {
        return Err(ValidationError::InvalidDateRange {
            start: start_date,
            end: end_date,
        });
    }
    if requested_days == 0 {
        return Err(ValidationError::NonPositiveDays);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveView {
    pub id: LeaveId,
    pub employee_id: EmployeeId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub requested_days: Days,
    pub leave_type: LeaveType,
    pub reason: Option<String>,
    pub status: LeaveStatus,
    pub active_flag: bool,
    pub accepted_flag: bool,
    pub created_at: i64,
    pub decided_at: Option<i64>,
}

impl From<LeaveRecord> for LeaveView {
    fn from(record: LeaveRecord) -> Self {
        Self {
            id: record.id,
            employee_id: record.employee_id,
            start_date: record.start_date,
            end_date: record.end_date,
            requested_days: record.requested_days,
            leave_type: record.leave_type,
            reason: record.reason,
            status: record.status,
            active_flag: record.status.active_flag(),
            accepted_flag: record.status.accepted_flag(),
            created_at: record.created_at,
            decided_at: record.decided_at,
        }
    }
}
