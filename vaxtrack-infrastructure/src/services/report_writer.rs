use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::info;

use vaxtrack_domain::ports::ReportArchive;
use vaxtrack_domain::CsvExport;

use crate::utils::ensure_parent_dir;

/// Writes exported CSV reports into a directory, one file per export.
pub struct CsvReportWriter {
    report_dir: PathBuf,
}

impl CsvReportWriter {
    pub fn new(report_dir: impl Into<PathBuf>) -> Self {
        Self {
            report_dir: report_dir.into(),
        }
    }

    fn target(&self, filename: &str) -> Result<PathBuf> {
        let name = Path::new(filename)
            .file_name()
            .filter(|name| name.len() == filename.len())
            .ok_or_else(|| anyhow!("refusing to write report outside report dir: {}", filename))?;
        Ok(self.report_dir.join(name))
    }
}

#[async_trait]
impl ReportArchive for CsvReportWriter {
    async fn save_csv(&self, export: &CsvExport) -> Result<String> {
        let path = self.target(&export.filename)?;
        ensure_parent_dir(&path).await?;
        fs::write(&path, export.content.as_bytes()).await?;
        let location = path.to_string_lossy().to_string();
        info!(bytes = export.content.len(), "report archived to {}", location);
        Ok(location)
    }
}
