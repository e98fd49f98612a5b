// Directory port: who reports to whom.

use crate::shared::core::primitives::{EmployeeId, ManagerId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("manager {0} not found")]
    ManagerNotFound(ManagerId),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait Directory: Send + Sync {
    /// Direct reports of `manager_id`, in a stable order.
    async fn reports_of(&self, manager_id: ManagerId) -> Result<Vec<EmployeeId>, DirectoryError>;
}
