// Balance ledger port: how many leave days each employee still has.
//
// Responsibilities
// - `debit` must refuse to drive a balance below zero.
// - `credit` fails rather than wrap or cap a balance that would overflow.

use crate::shared::core::primitives::{Days, EmployeeId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error(
        "employee {employee_id} requested {requested} days but only {available} are available"
    )]
    InsufficientBalance {
        employee_id: EmployeeId,
        requested: Days,
        available: Days,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait BalanceLedger: Send + Sync {
    async fn available(&self, employee_id: EmployeeId) -> Result<Days, LedgerError>;
    async fn debit(&self, employee_id: EmployeeId, days: Days) -> Result<(), LedgerError>;
    async fn credit(&self, employee_id: EmployeeId, days: Days) -> Result<(), LedgerError>;
}
