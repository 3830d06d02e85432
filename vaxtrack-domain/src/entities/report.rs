// Report entities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Inventory,
    Administration,
    Expiration,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Inventory => "inventory",
            ReportType::Administration => "administration",
            ReportType::Expiration => "expiration",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inventory" => Ok(ReportType::Inventory),
            "administration" => Ok(ReportType::Administration),
            "expiration" => Ok(ReportType::Expiration),
            other => Err(format!("unknown report type '{}'", other)),
        }
    }
}

/// Rendered report: the column names are the keys of the first row, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTable {
    pub report_type: ReportType,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// How field values are written into exported CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvMode {
    /// Values joined by commas as-is. Embedded commas or quotes are not escaped.
    #[default]
    Raw,
    /// RFC 4180 quoting.
    Quoted,
}

impl FromStr for CsvMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Ok(CsvMode::Raw),
            "quoted" => Ok(CsvMode::Quoted),
            other => Err(format!("unknown csv mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}
