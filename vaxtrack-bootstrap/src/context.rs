use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;

use vaxtrack_application::{AppState, Metrics};
use vaxtrack_domain::ports::ReportArchive;
use vaxtrack_domain::{AdministrationEvent, LossEvent, ReceiptEvent};
use vaxtrack_infrastructure::{
    AppConfig, CsvReportWriter, InMemoryRecordStore, SeedFileRepository, SystemClock,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let latency = config.store_latency;

        let seeds = SeedFileRepository::new();
        let vaccines = seeds.load_vaccines(&runtime_config.vaccines_path).await?;
        let inventory = seeds.load_inventory(&runtime_config.inventory_path).await?;

        let report_archive: Option<Arc<dyn ReportArchive>> = if config.archive_reports {
            Some(Arc::new(CsvReportWriter::new(&runtime_config.report_dir)))
        } else {
            None
        };

        let state = AppState {
            config: runtime_config,
            inventory: Arc::new(InMemoryRecordStore::with_records(inventory, latency)),
            vaccines: Arc::new(InMemoryRecordStore::with_records(vaccines, latency)),
            administrations: Arc::new(InMemoryRecordStore::<AdministrationEvent>::new(latency)),
            losses: Arc::new(InMemoryRecordStore::<LossEvent>::new(latency)),
            receipts: Arc::new(InMemoryRecordStore::<ReceiptEvent>::new(latency)),
            clock: Arc::new(SystemClock),
            report_archive,
            metrics: Arc::new(Metrics::default()),
            workflow_lock: Arc::new(Mutex::new(())),
        };

        Ok(Self { state })
    }
}
