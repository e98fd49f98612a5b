// Pure decision function for field edits.
//
// Responsibilities
// - Merge the patch over the current record and validate the merged period.
// - Plan the ledger delta when an Accepted record changes its day count.
// - Never perform input or output.

use crate::modules::leaves::core::lifecycle::{BalanceEffect, plan_days_change};
use crate::modules::leaves::core::record::{LeaveRecord, ValidationError};
use crate::modules::leaves::use_cases::update_leave::command::LeavePatch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan {
    pub record: LeaveRecord,
    pub effect: BalanceEffect,
}

impl UpdatePlan {
    pub fn changes(&self, current: &LeaveRecord) -> bool {
        &self.record != current
    }
}

pub fn decide_update(current: &LeaveRecord, patch: LeavePatch) -> Result<UpdatePlan, ValidationError> {
    let mut record = current.clone();
    if let Some(start_date) = patch.start_date {
        record.start_date = start_date;
    }
    if let Some(end_date) = patch.end_date {
        record.end_date = end_date;
    }
    if let Some(requested_days) = patch.requested_days {
        record.requested_days = requested_days;
    }
    if let Some(leave_type) = patch.leave_type {
        record.leave_type = leave_type;
    }
    if let Some(reason) = patch.reason {
        record.reason = Some(reason);
    }
    record.validate()?;

    let effect = plan_days_change(current.status, current.requested_days, record.requested_days);
    Ok(UpdatePlan { record, effect })
}
