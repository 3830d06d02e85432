use vaxtrack_domain::{
    days_until_expiry_trunc, expiration_status, generate_alerts, inventory_stats,
    query_inventory, stock_status, InventoryCriteria, InventoryLot, RecordId,
};

use crate::dtos::{Dashboard, LotDetail};
use crate::error::store_failure;
use crate::{AppError, AppState};

pub async fn list_inventory(
    state: &AppState,
    criteria: InventoryCriteria,
) -> Result<Vec<InventoryLot>, AppError> {
    let snapshot = state
        .inventory
        .get_all()
        .await
        .map_err(store_failure("load inventory"))?;
    Ok(query_inventory(&snapshot, &criteria, state.clock.now()))
}

/// One lot with its expiry and stock statuses worked out.
pub async fn get_lot(state: &AppState, id: RecordId) -> Result<LotDetail, AppError> {
    let lot = state
        .inventory
        .get_by_id(id)
        .await
        .map_err(store_failure("load lot"))?;
    let now = state.clock.now();
    let days_until_expiry = days_until_expiry_trunc(lot.expiration_date, now);
    let expiry = expiration_status(lot.expiration_date, now);
    let stock = stock_status(lot.remaining_quantity, state.config.low_stock_threshold);
    Ok(LotDetail {
        days_until_expiry,
        expiration_status: expiry,
        expiration_message: expiry.message(days_until_expiry),
        stock_status: stock,
        stock_message: stock.message().to_string(),
        lot,
    })
}

pub async fn dashboard(state: &AppState) -> Result<Dashboard, AppError> {
    let snapshot = state
        .inventory
        .get_all()
        .await
        .map_err(store_failure("load inventory"))?;
    let now = state.clock.now();
    Ok(Dashboard {
        stats: inventory_stats(&snapshot, now),
        alerts: generate_alerts(&snapshot, now, state.config.low_stock_threshold),
    })
}
