use crate::modules::leaves::core::record::{LeaveRecord, LeaveType};
use crate::modules::leaves::core::status::LeaveStatus;
use chrono::{Days as CalendarDays, NaiveDate};

/// Pending annual leave starting 2026-03-02 and covering `days` calendar days.
pub fn make_pending_record(id: u64, employee_id: u64, days: u32) -> LeaveRecord {
    let start_date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let end_date = start_date
        .checked_add_days(CalendarDays::new(u64::from(days.saturating_sub(1))))
        .unwrap();
    LeaveRecord {
        id,
        employee_id,
        start_date,
        end_date,
        requested_days: days,
        leave_type: LeaveType::Annual,
        reason: None,
        status: LeaveStatus::Pending,
        created_at: 1_772_409_600_000,
        decided_at: None,
        version: 0,
    }
}
