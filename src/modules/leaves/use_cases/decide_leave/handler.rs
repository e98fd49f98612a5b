use crate::modules::leaves::adapters::outbound::balance_ledger::BalanceLedger;
use crate::modules::leaves::adapters::outbound::ledger_effects::{
    apply_effect, ensure_covered, restore_record,
};
use crate::modules::leaves::adapters::outbound::record_store::LeaveRecordStore;
use crate::modules::leaves::core::record::LeaveRecord;
use crate::modules::leaves::errors::LeaveError;
use crate::modules::leaves::use_cases::decide_leave::decide::decide_leave;
use crate::shared::core::primitives::{LeaveId, now_millis};
use crate::shared::infrastructure::record_locks::KeyedLocks;
use std::sync::Arc;

pub struct DecideLeaveHandler<TStore, TLedger>
where
    TStore: LeaveRecordStore + Send + Sync + 'static,
    TLedger: BalanceLedger + Send + Sync + 'static,
{
    store: Arc<TStore>,
    ledger: Arc<TLedger>,
    locks: Arc<KeyedLocks<LeaveId>>,
}

impl<TStore, TLedger> DecideLeaveHandler<TStore, TLedger>
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

    pub async fn handle(&self, id: LeaveId, accepted: bool) -> Result<LeaveRecord, LeaveError> {
        let _guard = self.locks.acquire(id).await;

        let current = self.store.get(id).await?.ok_or(LeaveError::NotFound(id))?;
        let plan = decide_leave(&current, accepted, now_millis());
        if plan.transition.is_noop() {
            tracing::debug!(leave_id = id, status = %current.status, "decision unchanged");
            return Ok(current);
        }

        let effect = plan.transition.effect;
        if let Err(error) = ensure_covered(&*self.ledger, current.employee_id, effect).await {
            if error.is_backend() {
                tracing::error!(leave_id = id, %error, "balance ledger unavailable");
            } else {
                tracing::warn!(leave_id = id, employee_id = current.employee_id, %error, "decision refused");
            }
            return Err(error);
        }

        // the write lands before any days move, so a stale reader loses with a conflict
        let stored = match self.store.put(plan.record, current.version).await {
            Ok(stored) => stored,
            Err(error) => {
                let error = LeaveError::from(error);
                if error.is_backend() {
                    tracing::error!(leave_id = id, %error, "decision could not be stored");
                } else {
                    tracing::warn!(leave_id = id, %error, "decision lost a concurrent write");
                }
                return Err(error);
            }
        };

        if let Err(error) = apply_effect(&*self.ledger, current.employee_id, effect).await {
            tracing::warn!(leave_id = id, %error, "ledger refused the decision, restoring record");
            restore_record(&*self.store, current, stored.version).await;
            return Err(error);
        }

        tracing::info!(
            leave_id = id,
            employee_id = stored.employee_id,
            from = %plan.transition.from,
            to = %plan.transition.to,
            "leave request decided"
        );
        Ok(stored)
    }
}
