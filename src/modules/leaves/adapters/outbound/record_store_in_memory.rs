// In memory implementation of the LeaveRecordStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep records in a map ordered by id so listings are deterministic.
// - Enforce optimistic concurrency by checking the expected version on every put.
// - Simulate an offline backend and slow writes for failure-path tests.

use crate::modules::leaves::adapters::outbound::record_store::{
    LeaveRecordStore, RecordStoreError,
};
use crate::modules::leaves::core::record::LeaveRecord;
use crate::shared::core::primitives::{EmployeeId, LeaveId};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryLeaveStore {
    rows: RwLock<BTreeMap<LeaveId, LeaveRecord>>,
    sequence: AtomicU64,
    delay_put_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryLeaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose first assigned id is `first_id`.
    pub fn starting_at(first_id: LeaveId) -> Self {
        Self {
            sequence: AtomicU64::new(first_id.saturating_sub(1)),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_put_ms(&self, ms: u64) {
        self.delay_put_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), RecordStoreError> {
        if self.is_offline {
            return Err(RecordStoreError::Backend("Leave store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl LeaveRecordStore for InMemoryLeaveStore {
    async fn next_id(&self) -> Result<LeaveId, RecordStoreError> {
        self.ensure_online()?;
        Ok(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn get(&self, id: LeaveId) -> Result<Option<LeaveRecord>, RecordStoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn put(
        &self,
        record: LeaveRecord,
        expected_version: u64,
    ) -> Result<LeaveRecord, RecordStoreError> {
        self.ensure_online()?;
        let delay = self.delay_put_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.rows.write().await;
        let actual = guard.get(&record.id).map(|r| r.version).unwrap_or(0);
        if actual != expected_version {
            return Err(RecordStoreError::VersionMismatch {
                id: record.id,
                expected: expected_version,
                actual,
            });
        }
        let stored = LeaveRecord {
            version: expected_version + 1,
            ..record
        };
        guard.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: LeaveId) -> Result<bool, RecordStoreError> {
        self.ensure_online()?;
        Ok(self.rows.write().await.remove(&id).is_some())
    }

    async fn list_all(&self) -> Result<Vec<LeaveRecord>, RecordStoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn list_by_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<LeaveRecord>, RecordStoreError> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect())
    }
}
