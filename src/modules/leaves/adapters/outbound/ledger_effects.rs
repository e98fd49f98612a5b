// Translate planned balance effects into ledger calls.
//
// Responsibilities
// - `ensure_covered` reads the balance without changing it, so a short balance is refused before
//   the record is written.
// - `apply_effect` moves the days once the record write has landed.
// - `restore_record` puts the previous record back when the ledger refuses an effect after the
//   write.

use crate::modules::leaves::adapters::outbound::balance_ledger::BalanceLedger;
use crate::modules::leaves::adapters::outbound::record_store::LeaveRecordStore;
use crate::modules::leaves::core::lifecycle::BalanceEffect;
use crate::modules::leaves::core::record::LeaveRecord;
use crate::modules::leaves::errors::LeaveError;
use crate::shared::core::primitives::EmployeeId;

pub async fn ensure_covered(
    ledger: &impl BalanceLedger,
    employee_id: EmployeeId,
    effect: BalanceEffect,
) -> Result<(), LeaveError> {
    if let BalanceEffect::Debit(days) = effect {
        let available = ledger.available(employee_id).await?;
        if available < days {
            return Err(LeaveError::InsufficientBalance {
                employee_id,
                requested: days,
                available,
            });
        }
    }
    Ok(())
}

pub async fn apply_effect(
    ledger: &impl BalanceLedger,
    employee_id: EmployeeId,
    effect: BalanceEffect,
) -> Result<(), LeaveError> {
    match effect {
        BalanceEffect::None => Ok(()),
        BalanceEffect::Debit(days) => {
            ensure_covered(ledger, employee_id, effect).await?;
            ledger.debit(employee_id, days).await?;
            Ok(())
        }
        BalanceEffect::Credit(days) => {
            ledger.credit(employee_id, days).await?;
            Ok(())
        }
    }
}

/// Writes `previous` over the record stored at `written_version`. A failure is logged, since
/// the caller already reports the ledger error.
pub async fn restore_record(
    store: &impl LeaveRecordStore,
    previous: LeaveRecord,
    written_version: u64,
) {
    let leave_id = previous.id;
    if let Err(error) = store.put(previous, written_version).await {
        tracing::error!(leave_id, %error, "failed to restore leave request after ledger failure");
    }
}
