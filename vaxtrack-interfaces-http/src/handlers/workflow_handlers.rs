use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use vaxtrack_application::commands::{
    administration_commands, loss_commands, receiving_commands, reconciliation_commands,
};
use vaxtrack_application::dtos::{
    AdministerDosesRequest, DosesAdministered, LossReported, ReceiveShipmentRequest,
    ReconcileRequest, ReconciliationOutcome, ReportLossRequest, ShipmentReceived,
};
use vaxtrack_application::queries::record_queries;
use vaxtrack_application::AppState;
use vaxtrack_domain::{AdministrationEvent, LossEvent, ReceiptEvent};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn receive_shipment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ReceiveShipmentRequest>,
) -> Result<(StatusCode, Json<ShipmentReceived>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let outcome = receiving_commands::receive_shipment(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

pub async fn list_receipts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ReceiptEvent>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let receipts = record_queries::list_receipts(&state).await?;
    Ok(Json(receipts))
}

pub async fn administer_doses(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AdministerDosesRequest>,
) -> Result<(StatusCode, Json<DosesAdministered>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let outcome = administration_commands::administer_doses(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

pub async fn list_administrations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<AdministrationEvent>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let events = record_queries::list_administrations(&state).await?;
    Ok(Json(events))
}

pub async fn report_loss(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ReportLossRequest>,
) -> Result<(StatusCode, Json<LossReported>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let outcome = loss_commands::report_loss(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

pub async fn list_losses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<LossEvent>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let events = record_queries::list_losses(&state).await?;
    Ok(Json(events))
}

pub async fn reconcile_inventory(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ReconcileRequest>,
) -> Result<Json<ReconciliationOutcome>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let outcome = reconciliation_commands::reconcile_inventory(&state, payload).await?;
    Ok(Json(outcome))
}
