// Shared test fixture for the SubmitLeave command.
// Defaults come from `json/submit_leave.json`: employee 7, five days from 2026-03-02.

use crate::modules::leaves::core::record::LeaveType;
use crate::modules::leaves::use_cases::submit_leave::command::SubmitLeave;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitLeaveDto {
    pub employee_id: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub requested_days: u32,
    pub leave_type: LeaveType,
    pub reason: Option<String>,
}

pub struct SubmitLeaveBuilder {
    inner: SubmitLeave,
}

impl Default for SubmitLeaveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmitLeaveBuilder {
    pub fn new() -> Self {
        let path = concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/src/tests/fixtures/commands/json/submit_leave.json"
        );
        let json_str = fs::read_to_string(path).unwrap();
        let dto: SubmitLeaveDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: SubmitLeave {
                employee_id: dto.employee_id,
                start_date: dto.start_date,
                end_date: dto.end_date,
                requested_days: dto.requested_days,
                leave_type: dto.leave_type,
                reason: dto.reason,
            },
        }
    }

    pub fn employee_id(mut self, v: u64) -> Self {
        self.inner.employee_id = v;
        self
    }

    pub fn start_date(mut self, v: NaiveDate) -> Self {
        self.inner.start_date = v;
        self
    }

    pub fn end_date(mut self, v: NaiveDate) -> Self {
        self.inner.end_date = v;
        self
    }

    pub fn requested_days(mut self, v: u32) -> Self {
        self.inner.requested_days = v;
        self
    }

    pub fn leave_type(mut self, v: LeaveType) -> Self {
        self.inner.leave_type = v;
        self
    }

    pub fn reason(mut self, v: impl Into<String>) -> Self {
        self.inner.reason = Some(v.into());
        self
    }

    pub fn build(self) -> SubmitLeave {
        self.inner
    }
}
