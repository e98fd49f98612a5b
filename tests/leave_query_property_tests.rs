//! Property-based tests for the read side.
//!
//! Random batches of requests are submitted and decided, then the employee views are checked
//! against each other and against the ledger.

use chrono::NaiveDate;
use leave_requests::modules::leaves::adapters::outbound::balance_ledger::BalanceLedger;
use leave_requests::modules::leaves::adapters::outbound::balance_ledger_in_memory::InMemoryBalanceLedger;
use leave_requests::modules::leaves::adapters::outbound::directory_in_memory::InMemoryDirectory;
use leave_requests::modules::leaves::adapters::outbound::record_store_in_memory::InMemoryLeaveStore;
use leave_requests::modules::leaves::core::record::{LeaveRecord, LeaveType};
use leave_requests::modules::leaves::core::status::LeaveStatus;
use leave_requests::modules::leaves::service::LeaveService;
use leave_requests::modules::leaves::use_cases::submit_leave::command::SubmitLeave;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;

const STARTING_BALANCE: u32 = 1_000;

#[derive(Debug, Clone)]
struct Request {
    employee_id: u64,
    days: u32,
    decisions: Vec<bool>,
}

fn request_strategy() -> impl Strategy<Value = Request> {
    (
        prop_oneof![Just(7u64), Just(8u64)],
        1u32..=10,
        prop::collection::vec(prop::bool::ANY, 0..=3),
    )
        .prop_map(|(employee_id, days, decisions)| Request {
            employee_id,
            days,
            decisions,
        })
}

struct Outcome {
    all: Vec<LeaveRecord>,
    active: Vec<LeaveRecord>,
    inactive: Vec<LeaveRecord>,
    accepted: Vec<LeaveRecord>,
    rejected: Vec<LeaveRecord>,
    manager_pending: Vec<LeaveRecord>,
    available: u32,
}

fn ids(records: &[LeaveRecord]) -> BTreeSet<u64> {
    records.iter().map(|record| record.id).collect()
}

fn run(requests: Vec<Request>) -> Outcome {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    runtime.block_on(async move {
        let ledger = Arc::new(InMemoryBalanceLedger::with_balances([
            (7, STARTING_BALANCE),
            (8, STARTING_BALANCE),
        ]));
        let service = LeaveService::new(
            Arc::new(InMemoryLeaveStore::new()),
            ledger.clone(),
            Arc::new(InMemoryDirectory::with_reports([(1, vec![7])])),
        );

        for request in requests {
            let record = service
                .submit(SubmitLeave {
                    employee_id: request.employee_id,
                    start_date: NaiveDate::from_ymd_opt(2026, 5, 4).unwrap(),
                    end_date: NaiveDate::from_ymd_opt(2026, 5, 29).unwrap(),
                    requested_days: request.days,
                    leave_type: LeaveType::Annual,
                    reason: None,
                })
                .await
                .unwrap();
            for accepted in request.decisions {
                service.decide(record.id, accepted).await.unwrap();
            }
        }

        Outcome {
            all: service.list_by_employee(7).await.unwrap(),
            active: service.list_by_employee_and_active(7, true).await.unwrap(),
            inactive: service.list_by_employee_and_active(7, false).await.unwrap(),
            accepted: service.list_by_employee_and_decision(7, true).await.unwrap(),
            rejected: service.list_by_employee_and_decision(7, false).await.unwrap(),
            manager_pending: service
                .list_by_manager_and_status(1, LeaveStatus::Pending)
                .await
                .unwrap(),
            available: ledger.available(7).await.unwrap(),
        }
    })
}

proptest! {
    /// Active and inactive views split the employee view with no overlap.
    #[test]
    fn active_and_inactive_partition_the_employee_view(
        requests in prop::collection::vec(request_strategy(), 0..12)
    ) {
        let outcome = run(requests);
        let active = ids(&outcome.active);
        let inactive = ids(&outcome.inactive);
        prop_assert!(active.is_disjoint(&inactive));
        prop_assert_eq!(&active | &inactive, ids(&outcome.all));
    }

    /// Accepted and rejected views split the inactive view with no overlap.
    #[test]
    fn accepted_and_rejected_partition_the_inactive_view(
        requests in prop::collection::vec(request_strategy(), 0..12)
    ) {
        let outcome = run(requests);
        let accepted = ids(&outcome.accepted);
        let rejected = ids(&outcome.rejected);
        prop_assert!(accepted.is_disjoint(&rejected));
        prop_assert_eq!(&accepted | &rejected, ids(&outcome.inactive));
    }

    /// Whatever the decision history, the ledger holds exactly the days of accepted requests.
    #[test]
    fn the_ledger_reflects_exactly_the_accepted_days(
        requests in prop::collection::vec(request_strategy(), 0..12)
    ) {
        let outcome = run(requests);
        let accepted_days: u32 = outcome.accepted.iter().map(|record| record.requested_days).sum();
        prop_assert_eq!(outcome.available, STARTING_BALANCE - accepted_days);
        for record in &outcome.all {
            prop_assert_eq!(
                record.status == LeaveStatus::Accepted,
                outcome.accepted.iter().any(|accepted| accepted.id == record.id)
            );
        }
    }

    /// The manager's pending view is the pending view of its only report.
    #[test]
    fn the_manager_pending_view_matches_the_report(
        requests in prop::collection::vec(request_strategy(), 0..12)
    ) {
        let outcome = run(requests);
        prop_assert_eq!(ids(&outcome.manager_pending), ids(&outcome.active));
    }
}
