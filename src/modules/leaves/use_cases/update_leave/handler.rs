use crate::modules::leaves::adapters::outbound::balance_ledger::BalanceLedger;
use crate::modules::leaves::adapters::outbound::ledger_effects::{
    apply_effect, ensure_covered, restore_record,
};
use crate::modules::leaves::adapters::outbound::record_store::LeaveRecordStore;
use crate::modules::leaves::core::record::LeaveRecord;
use crate::modules::leaves::errors::LeaveError;
use crate::modules::leaves::use_cases::update_leave::command::LeavePatch;
use crate::modules::leaves::use_cases::update_leave::decide::decide_update;
use crate::shared::core::primitives::{EmployeeId, LeaveId};
use crate::shared::infrastructure::record_locks::KeyedLocks;
use std::sync::Arc;

pub struct UpdateLeaveHandler<TStore, TLedger>
where
    TStore: LeaveRecordStore + Send + Sync + 'static,
    TLedger: BalanceLedger + Send + Sync + 'static,
{
    store: Arc<TStore>,
    ledger: Arc<TLedger>,
    locks: Arc<KeyedLocks<LeaveId>>,
}

impl<TStore, TLedger> UpdateLeaveHandler<TStore, TLedger>
where
    TStore: LeaveRecordStore + Send + Sync + 'static,
    TLedger: BalanceLedger + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, ledger: Arc<TLedger>, locks: Arc<KeyedLocks<LeaveId>>) -> Self {
        Self {
            store,
            ledger,
            locks,
        }
    }

    pub async fn handle(&self, id: LeaveId, patch: LeavePatch) -> Result<LeaveRecord, LeaveError> {
        self.update(id, None, patch).await
    }

    /// Same as [`Self::handle`] but only touches a record owned by `employee_id`.
    pub async fn handle_for_employee(
        &self,
        employee_id: EmployeeId,
        id: LeaveId,
        patch: LeavePatch,
    ) -> Result<LeaveRecord, LeaveError> {
        self.update(id, Some(employee_id), patch).await
    }

    async fn update(
        &self,
        id: LeaveId,
        owner: Option<EmployeeId>,
        patch: LeavePatch,
    ) -> Result<LeaveRecord, LeaveError> {
        let _guard = self.locks.acquire(id).await;

        let current = self
            .store
            .get(id)
            .await?
            .filter(|record| owner.is_none_or(|employee_id| record.employee_id == employee_id))
            .ok_or(LeaveError::NotFound(id))?;

        let plan = decide_update(&current, patch)?;
        if !plan.changes(&current) {
            return Ok(current);
        }

        let effect = plan.effect;
        if let Err(error) = ensure_covered(&*self.ledger, current.employee_id, effect).await {
            if error.is_backend() {
                tracing::error!(leave_id = id, %error, "balance ledger unavailable");
            } else {
                tracing::warn!(leave_id = id, employee_id = current.employee_id, %error, "update refused");
            }
            return Err(error);
        }

        let stored = match self.store.put(plan.record, current.version).await {
            Ok(stored) => stored,
            Err(error) => {
                let error = LeaveError::from(error);
                if error.is_backend() {
                    tracing::error!(leave_id = id, %error, "update could not be stored");
                } else {
                    tracing::warn!(leave_id = id, %error, "update lost a concurrent write");
                }
                return Err(error);
            }
        };

        if let Err(error) = apply_effect(&*self.ledger, current.employee_id, effect).await {
            tracing::warn!(leave_id = id, %error, "ledger refused the update, restoring record");
            restore_record(&*self.store, current, stored.version).await;
            return Err(error);
        }

        tracing::info!(
            leave_id = id,
            employee_id = stored.employee_id,
            days = stored.requested_days,
            "leave request updated"
        );
        Ok(stored)
    }
}
