use crate::modules::leaves::adapters::outbound::directory::Directory;
use crate::modules::leaves::adapters::outbound::record_store::LeaveRecordStore;
use crate::modules::leaves::core::record::LeaveRecord;
use crate::modules::leaves::core::status::LeaveStatus;
use crate::modules::leaves::errors::LeaveError;
use crate::modules::leaves::use_cases::list_leaves::filters::{by_active, by_decision, by_status};
use crate::shared::core::primitives::{EmployeeId, LeaveId, ManagerId};
use std::collections::HashSet;
use std::sync::Arc;

/// Read side over the record store and the directory. Empty results are never errors.
pub struct LeaveQueries<TStore, TDirectory>
where
    TStore: LeaveRecordStore + Send + Sync + 'static,
    TDirectory: Directory + Send + Sync + 'static,
{
    store: Arc<TStore>,
    directory: Arc<TDirectory>,
}

impl<TStore, TDirectory> LeaveQueries<TStore, TDirectory>
where
    TStore: LeaveRecordStore + Send + Sync + 'static,
    TDirectory: Directory + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, directory: Arc<TDirectory>) -> Self {
        Self { store, directory }
    }

    pub async fn get(&self, id: LeaveId) -> Result<LeaveRecord, LeaveError> {
        self.store.get(id).await?.ok_or(LeaveError::NotFound(id))
    }

    pub async fn list_all(&self) -> Result<Vec<LeaveRecord>, LeaveError> {
        Ok(self.store.list_all().await?)
    }

    pub async fn list_by_active(&self, active: bool) -> Result<Vec<LeaveRecord>, LeaveError> {
        Ok(by_active(self.store.list_all().await?, active))
    }

    pub async fn list_by_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<LeaveRecord>, LeaveError> {
        Ok(self.store.list_by_employee(employee_id).await?)
    }

    pub async fn list_by_employee_and_decision(
        &self,
        employee_id: EmployeeId,
        accepted: bool,
    ) -> Result<Vec<LeaveRecord>, LeaveError> {
        Ok(by_decision(self.list_by_employee(employee_id).await?, accepted))
    }

    pub async fn list_by_employee_and_active(
        &self,
        employee_id: EmployeeId,
        active: bool,
    ) -> Result<Vec<LeaveRecord>, LeaveError> {
        Ok(by_active(self.list_by_employee(employee_id).await?, active))
    }

    /// Records of every direct report, concatenated in the directory's report order.
    pub async fn list_by_manager(
        &self,
        manager_id: ManagerId,
    ) -> Result<Vec<LeaveRecord>, LeaveError> {
        let reports = match self.directory.reports_of(manager_id).await {
            Ok(reports) => reports,
            Err(error) => {
                let error = LeaveError::from(error);
                if error.is_backend() {
                    tracing::error!(manager_id, %error, "directory unavailable");
                } else {
                    tracing::warn!(manager_id, %error, "manager lookup failed");
                }
                return Err(error);
            }
        };

        let mut seen = HashSet::new();
        let mut records = Vec::new();
        for employee_id in reports {
            if seen.insert(employee_id) {
                records.extend(self.store.list_by_employee(employee_id).await?);
            }
        }
        Ok(records)
    }

    pub async fn list_by_manager_and_status(
        &self,
        manager_id: ManagerId,
        status: LeaveStatus,
    ) -> Result<Vec<LeaveRecord>, LeaveError> {
        Ok(by_status(self.list_by_manager(manager_id).await?, status))
    }
}
