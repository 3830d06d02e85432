use tracing::info;

use vaxtrack_domain::{passed_inspection, LotStatus, NewInventoryLot, NewReceiptEvent};

use super::{normalize_optional_text, require, roll_back_created};
use crate::dtos::{ReceiveShipmentRequest, ShipmentReceived};
use crate::error::store_failure;
use crate::{AppError, AppState};

/// Records an incoming shipment and opens a lot holding the doses that passed inspection.
pub async fn receive_shipment(
    state: &AppState,
    request: ReceiveShipmentRequest,
) -> Result<ShipmentReceived, AppError> {
    let result = receive(state, request).await;
    if result.is_err() {
        state.metrics.record_workflow_failure();
    }
    result
}

async fn receive(
    state: &AppState,
    request: ReceiveShipmentRequest,
) -> Result<ShipmentReceived, AppError> {
    let vaccine_id = require(request.vaccine_id, "vaccineId")?;
    let lot_number = require(normalize_optional_text(request.lot_number), "lotNumber")?;
    let quantity_received = require(
        request.quantity_received.filter(|quantity| *quantity > 0),
        "quantityReceived",
    )?;
    let expiration_date = require(request.expiration_date, "expirationDate")?;
    let failed_inspection = request.failed_inspection.unwrap_or(0);
    let passed = passed_inspection(quantity_received, failed_inspection);
    let received_date = request
        .received_date
        .unwrap_or_else(|| state.clock.today());
    let received_by = normalize_optional_text(request.received_by)
        .unwrap_or_else(|| state.config.default_operator.clone());

    let _guard = state.workflow_lock.lock().await;

    let vaccine = state
        .vaccines
        .get_by_id(vaccine_id)
        .await
        .map_err(store_failure("look up vaccine for shipment"))?;

    let receipt = state
        .receipts
        .create(NewReceiptEvent {
            vaccine_id,
            lot_number: lot_number.clone(),
            quantity_sent: request.quantity_sent.unwrap_or(quantity_received),
            quantity_received,
            passed_inspection: passed,
            failed_inspection,
            discrepancy_reason: request.discrepancy_reason,
            expiration_date,
            received_date,
            received_by,
        })
        .await
        .map_err(store_failure("record shipment receipt"))?;

    let created = state
        .inventory
        .create(NewInventoryLot {
            vaccine_id,
            commercial_name: vaccine.commercial_name.clone(),
            generic_name: vaccine.generic_name.clone(),
            lot_number,
            quantity: quantity_received,
            remaining_quantity: passed,
            expiration_date,
            received_date,
            status: LotStatus::Active,
        })
        .await;
    let lot = match created {
        Ok(lot) => lot,
        Err(err) => return Err(roll_back_created(state.receipts.as_ref(), receipt.id, err).await),
    };

    state.metrics.record_shipment(passed);
    info!(
        receipt_id = %receipt.id,
        lot_id = %lot.id,
        vaccine = %vaccine.commercial_name,
        received = quantity_received,
        passed,
        "shipment received"
    );

    Ok(ShipmentReceived {
        receipt,
        lot,
        message: "Vaccine shipment received successfully!".to_string(),
    })
}
