use crate::modules::leaves::adapters::outbound::balance_ledger::LedgerError;
use crate::modules::leaves::adapters::outbound::directory::DirectoryError;
use crate::modules::leaves::adapters::outbound::record_store::RecordStoreError;
use crate::modules::leaves::core::record::ValidationError;
use crate::shared::core::primitives::{Days, EmployeeId, LeaveId, ManagerId};
use thiserror::Error;

/// Failure kinds returned by every leave operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeaveError {
    #[error("leave {0} not found")]
    NotFound(LeaveId),

    #[error("manager {0} not found")]
    ManagerNotFound(ManagerId),

    #[error(
        "employee {employee_id} requested {requested} days but only {available} are available"
    )]
    InsufficientBalance {
        employee_id: EmployeeId,
        requested: Days,
        available: Days,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("leave {0} was modified concurrently")]
    Conflict(LeaveId),

    #[error("backend error: {0}")]
    Backend(String),
}

impl LeaveError {
    /// True when a collaborator failed, as opposed to a business rule refusing the operation.
    pub fn is_backend(&self) -> bool {
        matches!(self, LeaveError::Backend(_))
    }
}

impl From<RecordStoreError> for LeaveError {
    fn from(error: RecordStoreError) -> Self {
        match error {
            RecordStoreError::VersionMismatch { id, .. } => LeaveError::Conflict(id),
            RecordStoreError::Backend(message) => LeaveError::Backend(message),
        }
    }
}

impl From<LedgerError> for LeaveError {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::InsufficientBalance {
                employee_id,
                requested,
                available,
            } => LeaveError::InsufficientBalance {
                employee_id,
                requested,
                available,
            },
            LedgerError::Backend(message) => LeaveError::Backend(message),
        }
    }
}

impl From<DirectoryError> for LeaveError {
    fn from(error: DirectoryError) -> Self {
        match error {
            DirectoryError::ManagerNotFound(manager_id) => LeaveError::ManagerNotFound(manager_id),
            DirectoryError::Backend(message) => LeaveError::Backend(message),
        }
    }
}
