use crate::modules::leaves::adapters::outbound::balance_ledger_in_memory::InMemoryBalanceLedger;
use crate::modules::leaves::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::leaves::adapters::outbound::record_store_in_memory::InMemoryLeaveStore;
use crate::modules::leaves::service::LeaveService;
use crate::shell::state::AppState;
use std::sync::Arc;

fn directory() -> Arc<InMemoryDirectory> {
    Arc::new(InMemoryDirectory::with_reports([(1, vec![7, 8]), (2, vec![])]))
}

/// Ids start at 101. Employees 7 and 8 hold 10 days each and report to manager 1;
/// manager 2 has no reports.
pub fn make_test_state() -> (AppState, Arc<InMemoryBalanceLedger>) {
    let store = Arc::new(InMemoryLeaveStore::starting_at(101));
    let ledger = Arc::new(InMemoryBalanceLedger::with_balances([(7, 10), (8, 10)]));
    let service = LeaveService::new(store, ledger.clone(), directory());
    (AppState::new(Arc::new(service)), ledger)
}

pub fn make_offline_store_state() -> AppState {
    let mut store = InMemoryLeaveStore::starting_at(101);
    store.toggle_offline();
    let ledger = Arc::new(InMemoryBalanceLedger::with_balances([(7, 10)]));
    let service = LeaveService::new(Arc::new(store), ledger, directory());
    AppState::new(Arc::new(service))
}
