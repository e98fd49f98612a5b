// LeaveStatus is the lifecycle position of a leave request.
//
// Notes
// - The legacy `active_flag` / `accepted_flag` pair is derived from this enum and is only
//   produced at the serialisation boundary.
// - `from_flags` is the single place where a flag pair is read back; `active == true` wins over
//   whatever `accepted` says.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Accepted,
    Rejected,
}

impl LeaveStatus {
    pub fn from_decision(accepted: bool) -> Self {
        if accepted {
            LeaveStatus::Accepted
        } else {
            LeaveStatus::Rejected
        }
    }

    /// Reads a legacy flag pair. `accepted_flag` is ignored while `active_flag` is set, so
    /// `(true, true)` selects pending requests. A filter matching both stored columns exactly
    /// would return nothing for that pair instead.
    pub fn from_flags(active_flag: bool, accepted_flag: bool) -> Self {
        if active_flag {
            LeaveStatus::Pending
        } else {
            LeaveStatus::from_decision(accepted_flag)
        }
    }

    pub fn active_flag(self) -> bool {
        matches!(self, LeaveStatus::Pending)
    }

    pub fn accepted_flag(self) -> bool {
        matches!(self, LeaveStatus::Accepted)
    }

    pub fn is_decided(self) -> bool {
        !self.active_flag()
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Accepted => write!(f, "accepted"),
            LeaveStatus::Rejected => write!(f, "rejected"),
        }
    }
}
