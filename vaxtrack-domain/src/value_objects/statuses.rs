// Derived per-lot statuses

use serde::{Deserialize, Serialize};

/// Shelf-life bucket of a lot relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpirationStatus {
    Expired,
    /// 7 days or fewer left.
    Critical,
    /// 30 days or fewer left.
    Warning,
    Good,
}

impl ExpirationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpirationStatus::Expired => "expired",
            ExpirationStatus::Critical => "critical",
            ExpirationStatus::Warning => "warning",
            ExpirationStatus::Good => "good",
        }
    }

    pub fn message(&self, days_until_expiry: i64) -> String {
        match self {
            ExpirationStatus::Expired => "Expired".to_string(),
            _ => format!("{}d left", days_until_expiry),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Out,
    Low,
    Good,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Out => "out",
            StockStatus::Low => "low",
            StockStatus::Good => "good",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            StockStatus::Out => "Out of Stock",
            StockStatus::Low => "Low Stock",
            StockStatus::Good => "In Stock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LotStatus {
    #[default]
    Active,
}
