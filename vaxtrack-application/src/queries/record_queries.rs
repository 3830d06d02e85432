use vaxtrack_domain::{AdministrationEvent, LossEvent, ReceiptEvent, VaccineCatalogEntry};

use crate::error::store_failure;
use crate::{AppError, AppState};

pub async fn list_vaccines(state: &AppState) -> Result<Vec<VaccineCatalogEntry>, AppError> {
    state
        .vaccines
        .get_all()
        .await
        .map_err(store_failure("load vaccine catalog"))
}

pub async fn list_administrations(
    state: &AppState,
) -> Result<Vec<AdministrationEvent>, AppError> {
    state
        .administrations
        .get_all()
        .await
        .map_err(store_failure("load administrations"))
}

pub async fn list_losses(state: &AppState) -> Result<Vec<LossEvent>, AppError> {
    state
        .losses
        .get_all()
        .await
        .map_err(store_failure("load losses"))
}

pub async fn list_receipts(state: &AppState) -> Result<Vec<ReceiptEvent>, AppError> {
    state
        .receipts
        .get_all()
        .await
        .map_err(store_failure("load receipts"))
}
