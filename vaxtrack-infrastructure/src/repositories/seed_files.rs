use std::path::Path;

use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::{info, warn};

use vaxtrack_domain::ports::Record;
use vaxtrack_domain::{InventoryLot, VaccineCatalogEntry};

use crate::config::validate_seed_records;

/// Reads the JSON seed collections the stores start from.
pub struct SeedFileRepository;

impl SeedFileRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn load_vaccines(&self, path: &str) -> anyhow::Result<Vec<VaccineCatalogEntry>> {
        load_records(path).await
    }

    pub async fn load_inventory(&self, path: &str) -> anyhow::Result<Vec<InventoryLot>> {
        load_records(path).await
    }
}

impl Default for SeedFileRepository {
    fn default() -> Self {
        Self::new()
    }
}

async fn load_records<R: Record + DeserializeOwned>(path: &str) -> anyhow::Result<Vec<R>> {
    if !Path::new(path).exists() {
        warn!("{} seed {} not found, starting empty", R::COLLECTION, path);
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path).await?;
    let records: Vec<R> = serde_json::from_str(&content)
        .map_err(|err| anyhow::anyhow!("invalid {} seed {}: {}", R::COLLECTION, path, err))?;
    validate_seed_records(&records)?;
    info!(collection = R::COLLECTION, count = records.len(), "loaded seed {}", path);
    Ok(records)
}
