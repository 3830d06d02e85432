// Mutating inventory workflows

pub mod administration_commands;
pub mod loss_commands;
pub mod receiving_commands;
pub mod reconciliation_commands;

use tracing::{error, warn};

use vaxtrack_domain::ports::{Record, RecordStore};
use vaxtrack_domain::{RecordId, StoreError};

use crate::AppError;

pub(crate) fn require<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::validation(format!("{} is required", field)))
}

pub(crate) fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub(crate) fn reject(message: impl Into<String>) -> AppError {
    let message = message.into();
    warn!("workflow rejected: {}", message);
    AppError::Validation(message)
}

/// Undoes the first step of a two-step workflow after the second step failed.
///
/// Returns the error to surface: the original failure when the rollback succeeded,
/// otherwise a store failure that names the record left behind.
pub(crate) async fn roll_back_created<R: Record>(
    store: &dyn RecordStore<R>,
    created: RecordId,
    cause: StoreError,
) -> AppError {
    match store.delete(created).await {
        Ok(_) => {
            warn!(
                collection = R::COLLECTION,
                id = %created,
                "rolled back after failed follow-up step: {}",
                cause
            );
            AppError::from(cause)
        }
        Err(rollback_err) => {
            error!(
                collection = R::COLLECTION,
                id = %created,
                "rollback failed, record left without its counterpart: {}",
                rollback_err
            );
            AppError::Store(anyhow::anyhow!(
                "{} (rollback of {} record {} also failed: {})",
                cause,
                R::COLLECTION,
                created,
                rollback_err
            ))
        }
    }
}
