// Identifier and quantity types shared by every module.
//
// Notes
// - All timestamps are epoch milliseconds, matching chrono's `timestamp_millis`.
// - Leave is counted in whole days.

pub type LeaveId = u64;
pub type EmployeeId = u64;
pub type ManagerId = u64;
pub type Days = u32;

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
