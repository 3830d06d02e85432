use tracing::info;

use vaxtrack_domain::{
    is_available_for_administration, is_expired, InventoryLot, InventoryLotPatch,
    NewAdministrationEvent,
};

use super::{normalize_optional_text, reject, require, roll_back_created};
use crate::dtos::{AdministerDosesRequest, DosesAdministered};
use crate::error::store_failure;
use crate::{AppError, AppState};

/// Lots offered to the administration form: doses left and not yet expired.
pub async fn available_lots_for_administration(
    state: &AppState,
) -> Result<Vec<InventoryLot>, AppError> {
    let now = state.clock.now();
    let lots = state
        .inventory
        .get_all()
        .await
        .map_err(store_failure("load inventory"))?;
    Ok(lots
        .into_iter()
        .filter(|lot| is_available_for_administration(lot, now))
        .collect())
}

/// Logs doses given from one lot and draws them down from its remaining quantity.
pub async fn administer_doses(
    state: &AppState,
    request: AdministerDosesRequest,
) -> Result<DosesAdministered, AppError> {
    let result = administer(state, request).await;
    if result.is_err() {
        state.metrics.record_workflow_failure();
    }
    result
}

async fn administer(
    state: &AppState,
    request: AdministerDosesRequest,
) -> Result<DosesAdministered, AppError> {
    let inventory_id = require(request.inventory_id, "inventoryId")?;
    let age_group = require(request.age_group, "ageGroup")?;
    let doses = require(
        request.doses_administered.filter(|doses| *doses > 0),
        "dosesAdministered",
    )?;
    let administered_date = request
        .administered_date
        .unwrap_or_else(|| state.clock.today());
    let administered_by = normalize_optional_text(request.administered_by)
        .unwrap_or_else(|| state.config.default_operator.clone());

    let _guard = state.workflow_lock.lock().await;

    let lot = state
        .inventory
        .get_by_id(inventory_id)
        .await
        .map_err(store_failure("load lot for administration"))?;
    if is_expired(lot.expiration_date, state.clock.now()) {
        return Err(reject(format!(
            "Lot {} of {} has expired and cannot be administered",
            lot.lot_number, lot.commercial_name
        )));
    }
    if doses > lot.remaining_quantity {
        return Err(reject("Cannot administer more doses than available"));
    }

    let event = state
        .administrations
        .create(NewAdministrationEvent {
            inventory_id,
            age_group,
            doses_administered: doses,
            administered_date,
            administered_by,
        })
        .await
        .map_err(store_failure("record administration"))?;

    let remaining = lot.remaining_quantity - doses;
    let updated = state
        .inventory
        .update(inventory_id, InventoryLotPatch::remaining(remaining))
        .await;
    let lot = match updated {
        Ok(lot) => lot,
        Err(err) => {
            return Err(roll_back_created(state.administrations.as_ref(), event.id, err).await)
        }
    };

    state.metrics.record_administration(doses);
    info!(
        event_id = %event.id,
        lot_id = %lot.id,
        age_group = age_group.as_str(),
        doses,
        remaining,
        "doses administered"
    );

    let message = format!(
        "Successfully administered {} doses of {}",
        doses, lot.commercial_name
    );
    Ok(DosesAdministered {
        event,
        lot,
        message,
    })
}
