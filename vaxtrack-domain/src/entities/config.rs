// Runtime configuration handed from infrastructure to the application layer

use serde::{Deserialize, Serialize};

use crate::entities::CsvMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub vaccines_path: String,
    pub inventory_path: String,
    pub report_dir: String,
    pub low_stock_threshold: u32,
    pub csv_mode: CsvMode,
    pub default_operator: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            api_token: None,
            vaccines_path: "./seed/vaccines.json".to_string(),
            inventory_path: "./seed/inventory.json".to_string(),
            report_dir: "./reports".to_string(),
            low_stock_threshold: crate::services::DEFAULT_LOW_STOCK_THRESHOLD,
            csv_mode: CsvMode::Raw,
            default_operator: "Current User".to_string(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

/// Per-operation artificial latency of the record store, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreLatency {
    pub get_all_ms: u64,
    pub get_by_id_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
}

impl StoreLatency {
    pub fn none() -> Self {
        Self::uniform(0)
    }

    pub fn uniform(ms: u64) -> Self {
        Self {
            get_all_ms: ms,
            get_by_id_ms: ms,
            create_ms: ms,
            update_ms: ms,
            delete_ms: ms,
        }
    }
}

impl Default for StoreLatency {
    fn default() -> Self {
        Self {
            get_all_ms: 300,
            get_by_id_ms: 200,
            create_ms: 500,
            update_ms: 400,
            delete_ms: 300,
        }
    }
}
