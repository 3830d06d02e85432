use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::time::sleep;
use tracing::debug;

use vaxtrack_domain::ports::{Record, RecordStore};
use vaxtrack_domain::{RecordId, StoreError, StoreLatency};

/// In-process record collection with simulated per-operation latency.
///
/// Every operation runs on its own spawned task, so once started it completes even if the
/// caller stops waiting. Ids come from a high-water mark and are never handed out twice.
pub struct InMemoryRecordStore<R: Record> {
    inner: Arc<StoreInner<R>>,
    latency: StoreLatency,
}

struct StoreInner<R> {
    records: Mutex<Vec<R>>,
    high_water: AtomicU64,
}

impl<R> StoreInner<R> {
    fn records(&self) -> Result<MutexGuard<'_, Vec<R>>, StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::Failure(anyhow!("record store lock poisoned")))
    }
}

impl<R: Record> InMemoryRecordStore<R> {
    pub fn new(latency: StoreLatency) -> Self {
        Self::with_records(Vec::new(), latency)
    }

    pub fn with_records(records: Vec<R>, latency: StoreLatency) -> Self {
        let high_water = records
            .iter()
            .map(|record| record.id().get())
            .max()
            .unwrap_or(0);
        Self {
            inner: Arc::new(StoreInner {
                records: Mutex::new(records),
                high_water: AtomicU64::new(high_water),
            }),
            latency,
        }
    }

    async fn run<T, F>(&self, delay_ms: u64, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&StoreInner<R>) -> Result<T, StoreError> + Send + 'static,
    {
        let inner = self.inner.clone();
        let task = tokio::spawn(delayed(delay_ms, async move { op(inner.as_ref()) }));
        task.await.map_err(|err| {
            StoreError::Failure(anyhow!("{} store task failed: {}", R::COLLECTION, err))
        })?
    }
}

async fn delayed<T>(delay_ms: u64, work: impl Future<Output = T>) -> T {
    if delay_ms > 0 {
        sleep(Duration::from_millis(delay_ms)).await;
    }
    work.await
}

#[async_trait]
impl<R: Record> RecordStore<R> for InMemoryRecordStore<R> {
    async fn get_all(&self) -> Result<Vec<R>, StoreError> {
        self.run(self.latency.get_all_ms, |inner| Ok(inner.records()?.clone()))
            .await
    }

    async fn get_by_id(&self, id: RecordId) -> Result<R, StoreError> {
        self.run(self.latency.get_by_id_ms, move |inner| {
            inner
                .records()?
                .iter()
                .find(|record| record.id() == id)
                .cloned()
                .ok_or_else(|| StoreError::not_found(R::COLLECTION, id))
        })
        .await
    }

    async fn create(&self, draft: R::Draft) -> Result<R, StoreError> {
        self.run(self.latency.create_ms, move |inner| {
            let mut records = inner.records()?;
            let id = RecordId(inner.high_water.fetch_add(1, Ordering::SeqCst) + 1);
            let record = R::from_draft(id, draft);
            if let Err(reason) = record.check_invariants() {
                return Err(StoreError::Rejected {
                    collection: R::COLLECTION,
                    reason,
                });
            }
            records.push(record.clone());
            debug!(collection = R::COLLECTION, %id, "record created");
            Ok(record)
        })
        .await
    }

    async fn update(&self, id: RecordId, patch: R::Patch) -> Result<R, StoreError> {
        self.run(self.latency.update_ms, move |inner| {
            let mut records = inner.records()?;
            let record = records
                .iter_mut()
                .find(|record| record.id() == id)
                .ok_or_else(|| StoreError::not_found(R::COLLECTION, id))?;
            let mut merged = record.clone();
            merged.apply_patch(patch);
            merged
                .check_invariants()
                .map_err(|reason| StoreError::Rejected {
                    collection: R::COLLECTION,
                    reason,
                })?;
            *record = merged.clone();
            debug!(collection = R::COLLECTION, %id, "record updated");
            Ok(merged)
        })
        .await
    }

    async fn delete(&self, id: RecordId) -> Result<R, StoreError> {
        self.run(self.latency.delete_ms, move |inner| {
            let mut records = inner.records()?;
            let index = records
                .iter()
                .position(|record| record.id() == id)
                .ok_or_else(|| StoreError::not_found(R::COLLECTION, id))?;
            debug!(collection = R::COLLECTION, %id, "record deleted");
            Ok(records.remove(index))
        })
        .await
    }
}
