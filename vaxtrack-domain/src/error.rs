use thiserror::Error;

use crate::value_objects::RecordId;

/// Rejections coming out of a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{collection} record {id} not found")]
    NotFound {
        collection: &'static str,
        id: RecordId,
    },
    #[error("{collection} record rejected: {reason}")]
    Rejected {
        collection: &'static str,
        reason: String,
    },
    #[error(transparent)]
    Failure(#[from] anyhow::Error),
}

impl StoreError {
    pub fn not_found(collection: &'static str, id: RecordId) -> Self {
        StoreError::NotFound { collection, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
