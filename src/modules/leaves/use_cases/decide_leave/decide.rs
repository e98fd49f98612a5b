// Pure decision function for accepting or rejecting a leave request.
//
// Responsibilities
// - Ask the lifecycle for the transition and its balance effect.
// - Stamp `decided_at` only when the status actually changes.
// - Never perform input or output.

use crate::modules::leaves::core::lifecycle::{Transition, plan_transition};
use crate::modules::leaves::core::record::LeaveRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionPlan {
    pub transition: Transition,
    pub record: LeaveRecord,
}

pub fn decide_leave(current: &LeaveRecord, accepted: bool, decided_at: i64) -> DecisionPlan {
    let transition = plan_transition(current.status, current.requested_days, accepted);
    let mut record = current.clone();
    if !transition.is_noop() {
        record.status = transition.to;
        record.decided_at = Some(decided_at);
    }
    DecisionPlan { transition, record }
}
