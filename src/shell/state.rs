use crate::modules::leaves::adapters::outbound::balance_ledger_in_memory::InMemoryBalanceLedger;
use crate::modules::leaves::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::leaves::adapters::outbound::record_store_in_memory::InMemoryLeaveStore;
use crate::modules::leaves::service::{InMemoryLeaveService, LeaveService};
use crate::shell::config::Seed;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<InMemoryLeaveService>,
}

impl AppState {
    pub fn new(service: Arc<InMemoryLeaveService>) -> Self {
        Self { service }
    }

    /// In-memory adapters loaded with the seed.
    pub fn in_memory(seed: &Seed) -> Self {
        let store = Arc::new(InMemoryLeaveStore::new());
        let ledger = Arc::new(InMemoryBalanceLedger::with_balances(
            seed.balances.iter().map(|(employee_id, days)| (*employee_id, *days)),
        ));
        let directory = Arc::new(InMemoryDirectory::with_reports(seed.managers.clone()));
        Self::new(Arc::new(LeaveService::new(store, ledger, directory)))
    }
}
