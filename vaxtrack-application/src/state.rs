use std::sync::Arc;

use tokio::sync::Mutex;

use vaxtrack_domain::ports::{Clock, RecordStore, ReportArchive};
use vaxtrack_domain::{
    AdministrationEvent, InventoryLot, LossEvent, ReceiptEvent, RuntimeConfig, VaccineCatalogEntry,
};

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub inventory: Arc<dyn RecordStore<InventoryLot>>,
    pub vaccines: Arc<dyn RecordStore<VaccineCatalogEntry>>,
    pub administrations: Arc<dyn RecordStore<AdministrationEvent>>,
    pub losses: Arc<dyn RecordStore<LossEvent>>,
    pub receipts: Arc<dyn RecordStore<ReceiptEvent>>,
    pub clock: Arc<dyn Clock>,
    pub report_archive: Option<Arc<dyn ReportArchive>>,
    pub metrics: Arc<Metrics>,
    /// Held for the whole of a mutating workflow so check-then-write sequences on a lot
    /// never interleave.
    pub workflow_lock: Arc<Mutex<()>>,
}
