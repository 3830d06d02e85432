use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use vaxtrack_domain::{CsvMode, RuntimeConfig, StoreLatency, DEFAULT_LOW_STOCK_THRESHOLD};

use crate::utils::resolve_path;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub vaccines_path: String,
    pub inventory_path: String,
    pub report_dir: String,
    pub archive_reports: bool,
    pub low_stock_threshold: u32,
    pub csv_mode: CsvMode,
    pub default_operator: String,
    pub log_dir: Option<String>,
    pub store_latency: StoreLatency,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let runtime = RuntimeConfig::default();
        Self {
            bind_addr: runtime.bind_addr,
            api_token: None,
            vaccines_path: runtime.vaccines_path,
            inventory_path: runtime.inventory_path,
            report_dir: runtime.report_dir,
            archive_reports: true,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            csv_mode: CsvMode::Raw,
            default_operator: runtime.default_operator,
            log_dir: None,
            store_latency: StoreLatency::default(),
            max_body_bytes: runtime.max_body_bytes,
            request_timeout_seconds: runtime.request_timeout_seconds,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("VAXTRACK_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config: {}", err))
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
        if let Some(log_dir) = &self.log_dir {
            if log_dir.trim().is_empty() {
                self.log_dir = None;
            }
        }
        let operator = self.default_operator.trim();
        self.default_operator = if operator.is_empty() {
            RuntimeConfig::default().default_operator
        } else {
            operator.to_string()
        };
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.vaccines_path = resolve_path(base, &self.vaccines_path);
        self.inventory_path = resolve_path(base, &self.inventory_path);
        self.report_dir = resolve_path(base, &self.report_dir);
        if let Some(log_dir) = &self.log_dir {
            self.log_dir = Some(resolve_path(base, log_dir));
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.vaccines_path.trim().is_empty() || self.inventory_path.trim().is_empty() {
            return Err(anyhow!("vaccines_path and inventory_path must not be empty"));
        }
        if self.archive_reports && self.report_dir.trim().is_empty() {
            return Err(anyhow!("report_dir must not be empty when archive_reports is on"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            vaccines_path: self.vaccines_path.clone(),
            inventory_path: self.inventory_path.clone(),
            report_dir: self.report_dir.clone(),
            low_stock_threshold: self.low_stock_threshold,
            csv_mode: self.csv_mode,
            default_operator: self.default_operator.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("VAXTRACK_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("VAXTRACK_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("VAXTRACK_VACCINES_PATH") {
            self.vaccines_path = value;
        }
        if let Ok(value) = env::var("VAXTRACK_INVENTORY_PATH") {
            self.inventory_path = value;
        }
        if let Ok(value) = env::var("VAXTRACK_REPORT_DIR") {
            self.report_dir = value;
        }
        if let Ok(value) = env::var("VAXTRACK_ARCHIVE_REPORTS") {
            self.archive_reports = value.parse().unwrap_or(self.archive_reports);
        }
        if let Ok(value) = env::var("VAXTRACK_LOW_STOCK_THRESHOLD") {
            self.low_stock_threshold = value.parse().unwrap_or(self.low_stock_threshold);
        }
        if let Ok(value) = env::var("VAXTRACK_CSV_QUOTING") {
            if let Ok(quoted) = value.parse::<bool>() {
                self.csv_mode = if quoted { CsvMode::Quoted } else { CsvMode::Raw };
            }
        }
        if let Ok(value) = env::var("VAXTRACK_DEFAULT_OPERATOR") {
            self.default_operator = value;
        }
        if let Ok(value) = env::var("VAXTRACK_LOG_DIR") {
            self.log_dir = Some(value);
        }
        if let Ok(value) = env::var("VAXTRACK_STORE_LATENCY_MS") {
            if let Ok(ms) = value.parse() {
                self.store_latency = StoreLatency::uniform(ms);
            }
        }
        if let Ok(value) = env::var("VAXTRACK_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("VAXTRACK_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}
