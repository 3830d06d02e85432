use thiserror::Error;
use tracing::error;

use vaxtrack_domain::{CsvExportError, StoreError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound { .. } => AppError::NotFound(value.to_string()),
            StoreError::Rejected { .. } => AppError::Store(anyhow::anyhow!(value.to_string())),
            StoreError::Failure(err) => AppError::Store(err),
        }
    }
}

impl From<CsvExportError> for AppError {
    fn from(value: CsvExportError) -> Self {
        match value {
            CsvExportError::NoData => AppError::Validation(value.to_string()),
            CsvExportError::Encode(err) => AppError::Store(err),
        }
    }
}

/// Logs a store rejection with what was being attempted, then converts it.
pub(crate) fn store_failure(action: &'static str) -> impl Fn(StoreError) -> AppError {
    move |err| {
        if err.is_not_found() {
            tracing::warn!("{}: {}", action, err);
        } else {
            error!("failed to {}: {}", action, err);
        }
        AppError::from(err)
    }
}
