// Lifecycle state machine for leave requests.
//
// Purpose
// - Decide the next status for a decision and the ledger movement that must accompany it.
// - Decide the ledger movement caused by editing the day count of a record.
//
// Responsibilities
// - Pending -> Accepted debits the requested days, Pending -> Rejected moves nothing.
// - Re-deciding with the same value is a no-op.
// - Accepted -> Rejected credits the debited days back, Rejected -> Accepted debits them again.
// - Only Accepted records hold days on the ledger, so only they react to day count edits.
// - Never perform input or output.

use crate::modules::leaves::core::status::LeaveStatus;
use crate::shared::core::primitives::Days;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceEffect {
    None,
    Debit(Days),
    Credit(Days),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: LeaveStatus,
    pub to: LeaveStatus,
    pub effect: BalanceEffect,
}

impl Transition {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

pub fn plan_transition(current: LeaveStatus, requested_days: Days, accepted: bool) -> Transition {
    let to = LeaveStatus::from_decision(accepted);
    let effect = match (current, to) {
        (LeaveStatus::Accepted, LeaveStatus::Rejected) => BalanceEffect::Credit(requested_days),
        (LeaveStatus::Pending | LeaveStatus::Rejected, LeaveStatus::Accepted) => {
            BalanceEffect::Debit(requested_days)
        }
        _ => BalanceEffect::None,
    };
    Transition {
        from: current,
        to,
        effect,
    }
}

pub fn plan_days_change(status: LeaveStatus, old_days: Days, new_days: Days) -> BalanceEffect {
    match status {
        LeaveStatus::Accepted if new_days > old_days => BalanceEffect::Debit(new_days - old_days),
        LeaveStatus::Accepted if new_days < old_days => BalanceEffect::Credit(old_days - new_days),
        _ => BalanceEffect::None,
    }
}
