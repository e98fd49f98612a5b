use crate::modules::leaves::adapters::outbound::record_store::LeaveRecordStore;
use crate::modules::leaves::core::record::{LeaveRecord, validate_period};
use crate::modules::leaves::errors::LeaveError;
use crate::modules::leaves::use_cases::submit_leave::command::SubmitLeave;
use crate::modules::leaves::use_cases::submit_leave::decide::decide_submit;
use crate::shared::core::primitives::now_millis;
use std::sync::Arc;

pub struct SubmitLeaveHandler<TStore>
where
    TStore: LeaveRecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SubmitLeaveHandler<TStore>
where
    TStore: LeaveRecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SubmitLeave) -> Result<LeaveRecord, LeaveError> {
        // reject before reserving an id
        validate_period(command.start_date, command.end_date, command.requested_days)?;

        let id = self.store.next_id().await?;
        let record = decide_submit(command, id, now_millis())?;
        let stored = self.store.put(record, 0).await?;

        tracing::info!(
            leave_id = stored.id,
            employee_id = stored.employee_id,
            days = stored.requested_days,
            "leave request submitted"
        );
        Ok(stored)
    }
}
