// In memory implementation of the Directory port.
//
// Notes
// - A manager is known once registered, even with no reports.
// - Reports keep their registration order.

use crate::modules::leaves::adapters::outbound::directory::{Directory, DirectoryError};
use crate::shared::core::primitives::{EmployeeId, ManagerId};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDirectory {
    reports: RwLock<HashMap<ManagerId, Vec<EmployeeId>>>,
    is_offline: bool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reports(
        reports: impl IntoIterator<Item = (ManagerId, Vec<EmployeeId>)>,
    ) -> Self {
        Self {
            reports: RwLock::new(reports.into_iter().collect()),
            is_offline: false,
        }
    }

    pub async fn register_manager(&self, manager_id: ManagerId) {
        self.reports.write().await.entry(manager_id).or_default();
    }

    pub async fn assign(&self, manager_id: ManagerId, employee_id: EmployeeId) {
        let mut guard = self.reports.write().await;
        let reports = guard.entry(manager_id).or_default();
        if !reports.contains(&employee_id) {
            reports.push(employee_id);
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl Directory for InMemoryDirectory {
    async fn reports_of(&self, manager_id: ManagerId) -> Result<Vec<EmployeeId>, DirectoryError> {
        if self.is_offline {
            return Err(DirectoryError::Backend("Directory offline".into()));
        }
        self.reports
            .read()
            .await
            .get(&manager_id)
            .cloned()
            .ok_or(DirectoryError::ManagerNotFound(manager_id))
    }
}
