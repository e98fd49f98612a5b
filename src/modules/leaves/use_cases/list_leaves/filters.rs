// Pure filters used by the read side.
//
// Inputs keep their order; filters only drop records.

use crate::modules::leaves::core::record::LeaveRecord;
use crate::modules::leaves::core::status::LeaveStatus;

pub fn by_active(records: Vec<LeaveRecord>, active: bool) -> Vec<LeaveRecord> {
    records
        .into_iter()
        .filter(|record| record.status.active_flag() == active)
        .collect()
}

/// Decided records whose accepted flag equals `accepted`. Pending records never match.
pub fn by_decision(records: Vec<LeaveRecord>, accepted: bool) -> Vec<LeaveRecord> {
    records
        .into_iter()
        .filter(|record| record.status.is_decided() && record.status.accepted_flag() == accepted)
        .collect()
}

pub fn by_status(records: Vec<LeaveRecord>, status: LeaveStatus) -> Vec<LeaveRecord> {
    records
        .into_iter()
        .filter(|record| record.status == status)
        .collect()
}
