use crate::modules::leaves::adapters::outbound::record_store::LeaveRecordStore;
use crate::modules::leaves::errors::LeaveError;
use crate::shared::core::primitives::LeaveId;
use crate::shared::infrastructure::record_locks::KeyedLocks;
use std::sync::Arc;

/// Removes a record in any state. The ledger is never touched.
pub struct DeleteLeaveHandler<TStore>
where
    TStore: LeaveRecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    locks: Arc<KeyedLocks<LeaveId>>,
}

impl<TStore> DeleteLeaveHandler<TStore>
where
    TStore: LeaveRecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, locks: Arc<KeyedLocks<LeaveId>>) -> Self {
        Self { store, locks }
    }

    pub async fn handle(&self, id: LeaveId) -> Result<(), LeaveError> {
        let _guard = self.locks.acquire(id).await;

        if !self.store.delete(id).await? {
            tracing::warn!(leave_id = id, "delete of unknown leave request");
            return Err(LeaveError::NotFound(id));
        }
        tracing::info!(leave_id = id, "leave request deleted");
        Ok(())
    }
}
