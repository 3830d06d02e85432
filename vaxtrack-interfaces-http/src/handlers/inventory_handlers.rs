use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

use vaxtrack_application::commands::administration_commands;
use vaxtrack_application::dtos::{Dashboard, LotDetail};
use vaxtrack_application::queries::{alert_queries, inventory_queries, record_queries};
use vaxtrack_application::AppState;
use vaxtrack_domain::{Alert, InventoryCriteria, InventoryLot, RecordId, VaccineCatalogEntry};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(criteria): Query<InventoryCriteria>,
) -> Result<Json<Vec<InventoryLot>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let lots = inventory_queries::list_inventory(&state, criteria).await?;
    Ok(Json(lots))
}

pub async fn get_lot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<LotDetail>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let detail = inventory_queries::get_lot(&state, RecordId(id)).await?;
    Ok(Json(detail))
}

pub async fn list_available_lots(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<InventoryLot>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let lots = administration_commands::available_lots_for_administration(&state).await?;
    Ok(Json(lots))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Dashboard>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let dashboard = inventory_queries::dashboard(&state).await?;
    Ok(Json(dashboard))
}

pub async fn list_alerts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Alert>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let alerts = alert_queries::list_alerts(&state).await?;
    Ok(Json(alerts))
}

pub async fn list_vaccines(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<VaccineCatalogEntry>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let vaccines = record_queries::list_vaccines(&state).await?;
    Ok(Json(vaccines))
}
