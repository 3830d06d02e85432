// Test doubles shared by the command and query tests

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use tokio::sync::Mutex as AsyncMutex;

use vaxtrack_domain::ports::{FixedClock, Record, RecordStore};
use vaxtrack_domain::{
    AdministrationEvent, InventoryLot, LossEvent, LotStatus, ReceiptEvent, RecordId,
    RuntimeConfig, StoreError, VaccineCatalogEntry,
};

use crate::{AppState, Metrics};

pub(crate) struct MemoryStore<R: Record> {
    records: Mutex<Vec<R>>,
    next_id: AtomicU64,
    pub fail_create: AtomicBool,
    pub fail_update: AtomicBool,
    pub fail_delete: AtomicBool,
    pub update_calls: AtomicUsize,
}

impl<R: Record> MemoryStore<R> {
    pub fn new(records: Vec<R>) -> Arc<Self> {
        let max = records.iter().map(|record| record.id().get()).max().unwrap_or(0);
        Arc::new(Self {
            records: Mutex::new(records),
            next_id: AtomicU64::new(max + 1),
            fail_create: AtomicBool::new(false),
            fail_update: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
            update_calls: AtomicUsize::new(0),
        })
    }

    pub fn snapshot(&self) -> Vec<R> {
        self.records.lock().expect("records lock").clone()
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for MemoryStore<R> {
    async fn get_all(&self) -> Result<Vec<R>, StoreError> {
        Ok(self.snapshot())
    }

    async fn get_by_id(&self, id: RecordId) -> Result<R, StoreError> {
        self.snapshot()
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(R::COLLECTION, id))
    }

    async fn create(&self, draft: R::Draft) -> Result<R, StoreError> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(StoreError::Failure(anyhow::anyhow!("create unavailable")));
        }
        let id = RecordId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let record = R::from_draft(id, draft);
        self.records.lock().expect("records lock").push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: RecordId, patch: R::Patch) -> Result<R, StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(StoreError::Failure(anyhow::anyhow!("update unavailable")));
        }
        let mut records = self.records.lock().expect("records lock");
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(R::COLLECTION, id))?;
        let mut merged = record.clone();
        merged.apply_patch(patch);
        merged.check_invariants().map_err(|reason| StoreError::Rejected {
            collection: R::COLLECTION,
            reason,
        })?;
        *record = merged.clone();
        Ok(merged)
    }

    async fn delete(&self, id: RecordId) -> Result<R, StoreError> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(StoreError::Failure(anyhow::anyhow!("delete unavailable")));
        }
        let mut records = self.records.lock().expect("records lock");
        let index = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(R::COLLECTION, id))?;
        Ok(records.remove(index))
    }
}

pub(crate) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).single().expect("now")
}

pub(crate) fn day(offset: i64) -> NaiveDate {
    (now() + Duration::days(offset)).date_naive()
}

pub(crate) fn lot(id: u64, name: &str, quantity: u32, remaining: u32, days: i64) -> InventoryLot {
    InventoryLot {
        id: RecordId(id),
        vaccine_id: RecordId(1),
        commercial_name: name.to_string(),
        generic_name: "Hep B".to_string(),
        lot_number: format!("LOT-{}", id),
        quantity,
        remaining_quantity: remaining,
        expiration_date: day(days),
        received_date: day(-20),
        status: LotStatus::Active,
    }
}

pub(crate) struct Harness {
    pub state: AppState,
    pub inventory: Arc<MemoryStore<InventoryLot>>,
    pub administrations: Arc<MemoryStore<AdministrationEvent>>,
    pub losses: Arc<MemoryStore<LossEvent>>,
    pub receipts: Arc<MemoryStore<ReceiptEvent>>,
}

/// Catalog: 1 Engerix-B, 2 Havrix.
/// Lots: 1 Engerix-B 5/20 good for 100 days, 2 Havrix 12/12 expired, 3 Heplisav 0/10.
pub(crate) fn harness() -> Harness {
    harness_with(vec![
        lot(1, "Engerix-B", 20, 5, 100),
        lot(2, "Havrix", 12, 12, -3),
        lot(3, "Heplisav", 10, 0, 60),
    ])
}

pub(crate) fn harness_with(lots: Vec<InventoryLot>) -> Harness {
    let vaccines = MemoryStore::new(vec![
        VaccineCatalogEntry {
            id: RecordId(1),
            commercial_name: "Engerix-B".to_string(),
            generic_name: "Hep B".to_string(),
        },
        VaccineCatalogEntry {
            id: RecordId(2),
            commercial_name: "Havrix".to_string(),
            generic_name: "Hep A".to_string(),
        },
    ]);
    let inventory = MemoryStore::new(lots);
    let administrations = MemoryStore::new(Vec::new());
    let losses = MemoryStore::new(Vec::new());
    let receipts = MemoryStore::new(Vec::new());

    let state = AppState {
        config: RuntimeConfig::default(),
        inventory: inventory.clone(),
        vaccines,
        administrations: administrations.clone(),
        losses: losses.clone(),
        receipts: receipts.clone(),
        clock: Arc::new(FixedClock(now())),
        report_archive: None,
        metrics: Arc::new(Metrics::default()),
        workflow_lock: Arc::new(AsyncMutex::new(())),
    };

    Harness {
        state,
        inventory,
        administrations,
        losses,
        receipts,
    }
}
