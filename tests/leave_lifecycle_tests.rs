// End to end in memory tests for the leave lifecycle.
//
// Each test composes the service from in-memory adapters, the same way the binary does.

use chrono::NaiveDate;
use leave_requests::modules::leaves::adapters::outbound::balance_ledger::BalanceLedger;
use leave_requests::modules::leaves::adapters::outbound::balance_ledger_in_memory::InMemoryBalanceLedger;
use leave_requests::modules::leaves::adapters::outbound::directory_in_memory::InMemoryDirectory;
use leave_requests::modules::leaves::adapters::outbound::record_store_in_memory::InMemoryLeaveStore;
use leave_requests::modules::leaves::core::record::LeaveType;
use leave_requests::modules::leaves::core::status::LeaveStatus;
use leave_requests::modules::leaves::errors::LeaveError;
use leave_requests::modules::leaves::service::{InMemoryLeaveService, LeaveService};
use leave_requests::modules::leaves::use_cases::submit_leave::command::SubmitLeave;
use leave_requests::modules::leaves::use_cases::update_leave::command::LeavePatch;
use rstest::{fixture, rstest};
use std::sync::Arc;

struct Harness {
    service: InMemoryLeaveService,
    ledger: Arc<InMemoryBalanceLedger>,
}

#[fixture]
fn harness() -> Harness {
    let store = Arc::new(InMemoryLeaveStore::starting_at(101));
    let ledger = Arc::new(InMemoryBalanceLedger::with_balances([(7, 10)]));
    let directory = Arc::new(InMemoryDirectory::with_reports([(1, vec![7]), (2, vec![])]));
    Harness {
        service: LeaveService::new(store, ledger.clone(), directory),
        ledger,
    }
}

fn five_days_for(employee_id: u64) -> SubmitLeave {
    SubmitLeave {
        employee_id,
        start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 3, 6).unwrap(),
        requested_days: 5,
        leave_type: LeaveType::Annual,
        reason: None,
    }
}

#[rstest]
#[tokio::test]
async fn it_should_debit_on_acceptance_and_on_a_larger_edit(harness: Harness) {
    let Harness { service, ledger } = harness;

    let submitted = service.submit(five_days_for(7)).await.unwrap();
    assert_eq!(submitted.id, 101);
    assert_eq!(submitted.status, LeaveStatus::Pending);

    service.decide(101, true).await.unwrap();
    assert_eq!(ledger.available(7).await.unwrap(), 5);

    let edited = service
        .update_fields(
            101,
            LeavePatch {
                requested_days: Some(8),
                ..LeavePatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.requested_days, 8);
    assert_eq!(ledger.available(7).await.unwrap(), 2);
}

#[rstest]
#[tokio::test]
async fn it_should_leave_a_request_pending_when_the_balance_is_short(harness: Harness) {
    let Harness { service, ledger } = harness;
    ledger.set_balance(7, 2).await;
    service.submit(five_days_for(7)).await.unwrap();
    let second = service.submit(five_days_for(7)).await.unwrap();
    assert_eq!(second.id, 102);

    let result = service.decide(102, true).await;

    assert_eq!(
        result,
        Err(LeaveError::InsufficientBalance {
            employee_id: 7,
            requested: 5,
            available: 2
        })
    );
    assert_eq!(service.get(102).await.unwrap().status, LeaveStatus::Pending);
    assert_eq!(ledger.available(7).await.unwrap(), 2);
}

#[rstest]
#[tokio::test]
async fn it_should_report_a_decision_on_an_unknown_request(harness: Harness) {
    assert_eq!(
        harness.service.decide(999, true).await,
        Err(LeaveError::NotFound(999))
    );
}

#[rstest]
#[tokio::test]
async fn it_should_delete_once(harness: Harness) {
    let service = harness.service;
    service.submit(five_days_for(7)).await.unwrap();

    assert_eq!(service.delete(101).await, Ok(()));
    assert_eq!(service.delete(101).await, Err(LeaveError::NotFound(101)));
}

#[rstest]
#[tokio::test]
async fn it_should_restore_the_balance_when_an_acceptance_is_reversed(harness: Harness) {
    let Harness { service, ledger } = harness;
    service.submit(five_days_for(7)).await.unwrap();

    service.decide(101, true).await.unwrap();
    service.decide(101, false).await.unwrap();
    assert_eq!(ledger.available(7).await.unwrap(), 10);

    service.decide(101, true).await.unwrap();
    assert_eq!(ledger.available(7).await.unwrap(), 5);
}

#[rstest]
#[tokio::test]
async fn it_should_tell_unknown_managers_from_managers_without_reports(harness: Harness) {
    let service = harness.service;
    service.submit(five_days_for(7)).await.unwrap();

    assert_eq!(service.list_by_manager(1).await.unwrap().len(), 1);
    assert_eq!(service.list_by_manager(2).await, Ok(vec![]));
    assert_eq!(
        service.list_by_manager(3).await,
        Err(LeaveError::ManagerNotFound(3))
    );
}

#[rstest]
#[tokio::test]
async fn it_should_never_double_debit_across_service_instances() {
    let store = Arc::new(InMemoryLeaveStore::starting_at(101));
    let ledger = Arc::new(InMemoryBalanceLedger::with_balances([(7, 10)]));
    let directory = Arc::new(InMemoryDirectory::new());
    let first = LeaveService::new(store.clone(), ledger.clone(), directory.clone());
    let second = LeaveService::new(store.clone(), ledger.clone(), directory);
    first.submit(five_days_for(7)).await.unwrap();
    store.set_delay_put_ms(10);

    let (a, b) = tokio::join!(first.decide(101, true), second.decide(101, true));

    assert!(a.is_ok() ^ b.is_ok());
    assert_eq!(a.err().or(b.err()), Some(LeaveError::Conflict(101)));
    assert_eq!(ledger.available(7).await.unwrap(), 5);
}

#[rstest]
#[tokio::test]
async fn it_should_report_a_conflict_when_the_balance_covers_exactly_one_acceptance() {
    let store = Arc::new(InMemoryLeaveStore::starting_at(101));
    let ledger = Arc::new(InMemoryBalanceLedger::with_balances([(7, 5)]));
    let directory = Arc::new(InMemoryDirectory::new());
    let first = LeaveService::new(store.clone(), ledger.clone(), directory.clone());
    let second = LeaveService::new(store.clone(), ledger.clone(), directory);
    first.submit(five_days_for(7)).await.unwrap();
    store.set_delay_put_ms(10);

    let (a, b) = tokio::join!(first.decide(101, true), second.decide(101, true));

    assert!(a.is_ok() ^ b.is_ok());
    assert_eq!(a.err().or(b.err()), Some(LeaveError::Conflict(101)));
    assert_eq!(first.get(101).await.unwrap().status, LeaveStatus::Accepted);
    assert_eq!(ledger.available(7).await.unwrap(), 0);
}
