// Composition of the leave use cases behind one operation set.
//
// Responsibilities
// - Own the per-record lock table shared by every writing handler.
// - Delegate each operation to its use case handler.
// - Translate the legacy flag pair of the manager view onto the status enum.

use crate::modules::leaves::adapters::outbound::balance_ledger::BalanceLedger;
use crate::modules::leaves::adapters::outbound::balance_ledger_in_memory::InMemoryBalanceLedger;
use crate::modules::leaves::adapters::outbound::directory::Directory;
use crate::modules::leaves::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::leaves::adapters::outbound::record_store::LeaveRecordStore;
use crate::modules::leaves::adapters::outbound::record_store_in_memory::InMemoryLeaveStore;
use crate::modules::leaves::core::record::LeaveRecord;
use crate::modules::leaves::core::status::LeaveStatus;
use crate::modules::leaves::errors::LeaveError;
use crate::modules::leaves::use_cases::decide_leave::handler::DecideLeaveHandler;
use crate::modules::leaves::use_cases::delete_leave::handler::DeleteLeaveHandler;
use crate::modules::leaves::use_cases::list_leaves::handler::LeaveQueries;
use crate::modules::leaves::use_cases::submit_leave::command::SubmitLeave;
use crate::modules::leaves::use_cases::submit_leave::handler::SubmitLeaveHandler;
use crate::modules::leaves::use_cases::update_leave::command::LeavePatch;
use crate::modules::leaves::use_cases::update_leave::handler::UpdateLeaveHandler;
use crate::shared::core::primitives::{EmployeeId, LeaveId, ManagerId};
use crate::shared::infrastructure::record_locks::KeyedLocks;
use std::sync::Arc;

pub type InMemoryLeaveService =
    LeaveService<InMemoryLeaveStore, InMemoryBalanceLedger, InMemoryDirectory>;

pub struct LeaveService<TStore, TLedger, TDirectory>
where
    TStore: LeaveRecordStore + Send + Sync + 'static,
    TLedger: BalanceLedger + Send + Sync + 'static,
    TDirectory: Directory + Send + Sync + 'static,
{
    submit_handler: SubmitLeaveHandler<TStore>,
    decide_handler: DecideLeaveHandler<TStore, TLedger>,
    update_handler: UpdateLeaveHandler<TStore, TLedger>,
    delete_handler: DeleteLeaveHandler<TStore>,
    queries: LeaveQueries<TStore, TDirectory>,
}

impl<TStore, TLedger, TDirectory> LeaveService<TStore, TLedger, TDirectory>
where
    TStore: LeaveRecordStore + Send + Sync + 'static,
    TLedger: BalanceLedger + Send + Sync + 'static,
    TDirectory: Directory + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, ledger: Arc<TLedger>, directory: Arc<TDirectory>) -> Self {
        let locks = Arc::new(KeyedLocks::new());
        Self {
            submit_handler: SubmitLeaveHandler::new(store.clone()),
            decide_handler: DecideLeaveHandler::new(store.clone(), ledger.clone(), locks.clone()),
            update_handler: UpdateLeaveHandler::new(store.clone(), ledger, locks.clone()),
            delete_handler: DeleteLeaveHandler::new(store.clone(), locks),
            queries: LeaveQueries::new(store, directory),
        }
    }

    pub async fn submit(&self, command: SubmitLeave) -> Result<LeaveRecord, LeaveError> {
        self.submit_handler.handle(command).await
    }

    pub async fn decide(&self, id: LeaveId, accepted: bool) -> Result<LeaveRecord, LeaveError> {
        self.decide_handler.handle(id, accepted).await
    }

    pub async fn update_fields(
        &self,
        id: LeaveId,
        patch: LeavePatch,
    ) -> Result<LeaveRecord, LeaveError> {
        self.update_handler.handle(id, patch).await
    }

    pub async fn update_for_employee(
        &self,
        employee_id: EmployeeId,
        id: LeaveId,
        patch: LeavePatch,
    ) -> Result<LeaveRecord, LeaveError> {
        self.update_handler
            .handle_for_employee(employee_id, id, patch)
            .await
    }

    pub async fn delete(&self, id: LeaveId) -> Result<(), LeaveError> {
        self.delete_handler.handle(id).await
    }

    pub async fn get(&self, id: LeaveId) -> Result<LeaveRecord, LeaveError> {
        self.queries.get(id).await
    }

    pub async fn list_all(&self) -> Result<Vec<LeaveRecord>, LeaveError> {
        self.queries.list_all().await
    }

    pub async fn list_by_active(&self, active: bool) -> Result<Vec<LeaveRecord>, LeaveError> {
        self.queries.list_by_active(active).await
    }

    pub async fn list_by_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<LeaveRecord>, LeaveError> {
        self.queries.list_by_employee(employee_id).await
    }

    pub async fn list_by_employee_and_decision(
        &self,
        employee_id: EmployeeId,
        accepted: bool,
    ) -> Result<Vec<LeaveRecord>, LeaveError> {
        self.queries
            .list_by_employee_and_decision(employee_id, accepted)
            .await
    }

    pub async fn list_by_employee_and_active(
        &self,
        employee_id: EmployeeId,
        active: bool,
    ) -> Result<Vec<LeaveRecord>, LeaveError> {
        self.queries
            .list_by_employee_and_active(employee_id, active)
            .await
    }

    pub async fn list_by_manager(
        &self,
        manager_id: ManagerId,
    ) -> Result<Vec<LeaveRecord>, LeaveError> {
        self.queries.list_by_manager(manager_id).await
    }

    pub async fn list_by_manager_and_status(
        &self,
        manager_id: ManagerId,
        status: LeaveStatus,
    ) -> Result<Vec<LeaveRecord>, LeaveError> {
        self.queries
            .list_by_manager_and_status(manager_id, status)
            .await
    }

    /// Legacy entry point: `active_flag == true` selects pending records whatever
    /// `accepted_flag` says.
    pub async fn list_by_manager_and_flags(
        &self,
        manager_id: ManagerId,
        active_flag: bool,
        accepted_flag: bool,
    ) -> Result<Vec<LeaveRecord>, LeaveError> {
        let status = LeaveStatus::from_flags(active_flag, accepted_flag);
        self.list_by_manager_and_status(manager_id, status).await
    }
}
