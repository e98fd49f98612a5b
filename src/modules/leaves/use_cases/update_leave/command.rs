// Field patch for an existing leave request.
//
// Every field is optional; absent fields keep their stored value. Status, owner and id are not
// patchable.

use crate::modules::leaves::core::record::LeaveType;
use crate::shared::core::primitives::Days;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LeavePatch {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub requested_days: Option<Days>,
    pub leave_type: Option<LeaveType>,
    pub reason: Option<String>,
}

impl LeavePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
