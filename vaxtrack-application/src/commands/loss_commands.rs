use tracing::info;

use vaxtrack_domain::{InventoryLotPatch, NewLossEvent};

use super::{normalize_optional_text, reject, require, roll_back_created};
use crate::dtos::{LossReported, ReportLossRequest};
use crate::error::store_failure;
use crate::{AppError, AppState};

/// Records doses lost from a lot and removes them from its remaining quantity.
pub async fn report_loss(
    state: &AppState,
    request: ReportLossRequest,
) -> Result<LossReported, AppError> {
    let result = record_loss(state, request).await;
    if result.is_err() {
        state.metrics.record_workflow_failure();
    }
    result
}

async fn record_loss(
    state: &AppState,
    request: ReportLossRequest,
) -> Result<LossReported, AppError> {
    let inventory_id = require(request.inventory_id, "inventoryId")?;
    let quantity = require(request.quantity.filter(|quantity| *quantity > 0), "quantity")?;
    let reason = require(request.reason, "reason")?;
    let details = normalize_optional_text(request.details).unwrap_or_default();
    let reported_date = request
        .reported_date
        .unwrap_or_else(|| state.clock.today());
    let reported_by = normalize_optional_text(request.reported_by)
        .unwrap_or_else(|| state.config.default_operator.clone());

    let _guard = state.workflow_lock.lock().await;

    let lot = state
        .inventory
        .get_by_id(inventory_id)
        .await
        .map_err(store_failure("load lot for loss report"))?;
    if quantity > lot.remaining_quantity {
        return Err(reject("Cannot report loss greater than available quantity"));
    }

    let event = state
        .losses
        .create(NewLossEvent {
            inventory_id,
            quantity,
            reason,
            details,
            reported_date,
            reported_by,
        })
        .await
        .map_err(store_failure("record loss"))?;

    let remaining = lot.remaining_quantity - quantity;
    let lot = match state
        .inventory
        .update(inventory_id, InventoryLotPatch::remaining(remaining))
        .await
    {
        Ok(lot) => lot,
        Err(err) => return Err(roll_back_created(state.losses.as_ref(), event.id, err).await),
    };

    state.metrics.record_loss(quantity);
    info!(
        event_id = %event.id,
        lot_id = %lot.id,
        reason = reason.as_str(),
        quantity,
        remaining,
        "loss reported"
    );

    let message = format!("Loss reported successfully for {}", lot.commercial_name);
    Ok(LossReported { event, lot, message })
}
