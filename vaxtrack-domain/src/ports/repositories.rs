use async_trait::async_trait;

use crate::error::StoreError;
use crate::value_objects::RecordId;

/// A value type kept in one store collection.
pub trait Record: Clone + Send + Sync + 'static {
    /// Fields supplied on `create`; the store assigns the id.
    type Draft: Send + 'static;
    /// Partial fields for `update`, merged shallowly.
    type Patch: Send + 'static;

    const COLLECTION: &'static str;

    fn id(&self) -> RecordId;
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;
    fn apply_patch(&mut self, patch: Self::Patch);

    fn check_invariants(&self) -> Result<(), String> {
        Ok(())
    }
}

/// CRUD over one collection. Snapshots are owned copies in insertion order.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    async fn get_all(&self) -> Result<Vec<R>, StoreError>;
    async fn get_by_id(&self, id: RecordId) -> Result<R, StoreError>;
    async fn create(&self, draft: R::Draft) -> Result<R, StoreError>;
    async fn update(&self, id: RecordId, patch: R::Patch) -> Result<R, StoreError>;
    async fn delete(&self, id: RecordId) -> Result<R, StoreError>;
}
