use tracing::info;

use vaxtrack_domain::InventoryLotPatch;

use super::{reject, require};
use crate::dtos::{ReconcileRequest, ReconciliationOutcome};
use crate::error::store_failure;
use crate::{AppError, AppState};

/// Sets a lot's remaining quantity to a physically counted value.
///
/// A count equal to the recorded remaining quantity is a no-op. A differing count needs an
/// adjustment reason and may not exceed the doses originally received.
pub async fn reconcile_inventory(
    state: &AppState,
    request: ReconcileRequest,
) -> Result<ReconciliationOutcome, AppError> {
    let result = reconcile(state, request).await;
    if result.is_err() {
        state.metrics.record_workflow_failure();
    }
    result
}

async fn reconcile(
    state: &AppState,
    request: ReconcileRequest,
) -> Result<ReconciliationOutcome, AppError> {
    let inventory_id = require(request.inventory_id, "inventoryId")?;
    let physical_count = require(request.physical_count, "physicalCount")?;

    let _guard = state.workflow_lock.lock().await;

    let lot = state
        .inventory
        .get_by_id(inventory_id)
        .await
        .map_err(store_failure("load lot for reconciliation"))?;

    if physical_count == lot.remaining_quantity {
        state.metrics.record_reconciliation(false);
        info!(lot_id = %lot.id, count = physical_count, "reconciliation counts match");
        return Ok(ReconciliationOutcome::CountsMatch {
            lot,
            message: "No adjustment needed - counts match!".to_string(),
        });
    }

    let reason = request
        .adjustment_reason
        .ok_or_else(|| reject("Please provide a reason for the adjustment"))?;
    if physical_count > lot.quantity {
        return Err(reject(format!(
            "Physical count {} exceeds the {} doses received for lot {}",
            physical_count, lot.quantity, lot.lot_number
        )));
    }

    let previous_count = lot.remaining_quantity;
    let difference = i64::from(physical_count) - i64::from(previous_count);
    let lot = state
        .inventory
        .update(inventory_id, InventoryLotPatch::remaining(physical_count))
        .await
        .map_err(store_failure("apply reconciliation"))?;

    state.metrics.record_reconciliation(true);
    info!(
        lot_id = %lot.id,
        previous_count,
        physical_count,
        difference,
        reason = reason.as_str(),
        "inventory reconciled"
    );

    let verb = if difference > 0 { "Added" } else { "Removed" };
    let message = format!(
        "Inventory adjusted successfully! {} {} doses",
        verb,
        difference.abs()
    );
    Ok(ReconciliationOutcome::Adjusted {
        lot,
        previous_count,
        physical_count,
        difference,
        reason,
        message,
    })
}
