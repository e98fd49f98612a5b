// In memory implementation of the BalanceLedger port.
//
// Notes
// - Employees without an entry have zero days available.
// - Debit checks and subtracts under one write lock, so concurrent debits cannot overdraw.

use crate::modules::leaves::adapters::outbound::balance_ledger::{BalanceLedger, LedgerError};
use crate::shared::core::primitives::{Days, EmployeeId};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryBalanceLedger {
    balances: RwLock<HashMap<EmployeeId, Days>>,
    is_offline: bool,
}

impl InMemoryBalanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balances(balances: impl IntoIterator<Item = (EmployeeId, Days)>) -> Self {
        Self {
            balances: RwLock::new(balances.into_iter().collect()),
            is_offline: false,
        }
    }

    pub async fn set_balance(&self, employee_id: EmployeeId, days: Days) {
        self.balances.write().await.insert(employee_id, days);
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), LedgerError> {
        if self.is_offline {
            return Err(LedgerError::Backend("Balance ledger offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl BalanceLedger for InMemoryBalanceLedger {
    async fn available(&self, employee_id: EmployeeId) -> Result<Days, LedgerError> {
        self.ensure_online()?;
        Ok(self
            .balances
            .read()
            .await
            .get(&employee_id)
            .copied()
            .unwrap_or(0))
    }

    async fn debit(&self, employee_id: EmployeeId, days: Days) -> Result<(), LedgerError> {
        self.ensure_online()?;
        let mut guard = self.balances.write().await;
        let balance = guard.entry(employee_id).or_insert(0);
        if days > *balance {
            return Err(LedgerError::InsufficientBalance {
                employee_id,
                requested: days,
                available: *balance,
            });
        }
        *balance -= days;
        Ok(())
    }

    async fn credit(&self, employee_id: EmployeeId, days: Days) -> Result<(), LedgerError> {
        self.ensure_online()?;
        let mut guard = self.balances.write().await;
        let balance = guard.entry(employee_id).or_insert(0);
        *balance = balance.checked_add(days).ok_or_else(|| {
            LedgerError::Backend(format!("balance of employee {employee_id} would overflow"))
        })?;
        Ok(())
    }
}
