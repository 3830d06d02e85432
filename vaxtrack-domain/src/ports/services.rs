use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::CsvExport;

/// Source of "now" for every derivation, query and workflow.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Keeps a copy of every exported CSV report.
#[async_trait]
pub trait ReportArchive: Send + Sync {
    /// Stores the export and returns where it was written.
    async fn save_csv(&self, export: &CsvExport) -> anyhow::Result<String>;
}
