// Record store port for leave requests.
//
// Purpose
// - Describe what the leave lifecycle needs from persistence without implementing it.
//
// Responsibilities
// - `put` is a compare-and-swap: it succeeds only when the stored version equals
//   `expected_version` (0 means "not stored yet") and returns the record with its new version.
// - `list_all` and `list_by_employee` return records in ascending id order.

use crate::modules::leaves::core::record::LeaveRecord;
use crate::shared::core::primitives::{EmployeeId, LeaveId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordStoreError {
    #[error("version mismatch for leave {id}: expected {expected}, actual {actual}")]
    VersionMismatch {
        id: LeaveId,
        expected: u64,
        actual: u64,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait LeaveRecordStore: Send + Sync {
    async fn next_id(&self) -> Result<LeaveId, RecordStoreError>;
    async fn get(&self, id: LeaveId) -> Result<Option<LeaveRecord>, RecordStoreError>;
    async fn put(
        &self,
        record: LeaveRecord,
        expected_version: u64,
    ) -> Result<LeaveRecord, RecordStoreError>;
    async fn delete(&self, id: LeaveId) -> Result<bool, RecordStoreError>;
    async fn list_all(&self) -> Result<Vec<LeaveRecord>, RecordStoreError>;
    async fn list_by_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<LeaveRecord>, RecordStoreError>;
}
