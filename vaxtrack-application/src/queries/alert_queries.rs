use vaxtrack_domain::{generate_alerts, Alert};

use crate::error::store_failure;
use crate::{AppError, AppState};

pub async fn list_alerts(state: &AppState) -> Result<Vec<Alert>, AppError> {
    let snapshot = state
        .inventory
        .get_all()
        .await
        .map_err(store_failure("load inventory for alerts"))?;
    Ok(generate_alerts(
        &snapshot,
        state.clock.now(),
        state.config.low_stock_threshold,
    ))
}
