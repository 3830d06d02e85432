// Request and response shapes for the inventory workflows

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use vaxtrack_domain::{
    AdjustmentReason, AdministrationEvent, AgeGroup, Alert, CsvExport, DateRange, DiscrepancyReason,
    ExpirationStatus, InventoryLot, InventoryStats, LossEvent, LossReason, ReceiptEvent,
    RecordId, ReportType, StockStatus,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ReceiveShipmentRequest {
    pub vaccine_id: Option<RecordId>,
    pub lot_number: Option<String>,
    pub quantity_sent: Option<u32>,
    pub quantity_received: Option<u32>,
    pub failed_inspection: Option<u32>,
    pub discrepancy_reason: Option<DiscrepancyReason>,
    pub expiration_date: Option<NaiveDate>,
    pub received_date: Option<NaiveDate>,
    pub received_by: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentReceived {
    pub receipt: ReceiptEvent,
    pub lot: InventoryLot,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AdministerDosesRequest {
    pub inventory_id: Option<RecordId>,
    pub age_group: Option<AgeGroup>,
    pub doses_administered: Option<u32>,
    pub administered_date: Option<NaiveDate>,
    pub administered_by: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DosesAdministered {
    pub event: AdministrationEvent,
    pub lot: InventoryLot,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ReportLossRequest {
    pub inventory_id: Option<RecordId>,
    pub quantity: Option<u32>,
    pub reason: Option<LossReason>,
    pub details: Option<String>,
    pub reported_date: Option<NaiveDate>,
    pub reported_by: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LossReported {
    pub event: LossEvent,
    pub lot: InventoryLot,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ReconcileRequest {
    pub inventory_id: Option<RecordId>,
    pub physical_count: Option<u32>,
    pub adjustment_reason: Option<AdjustmentReason>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReconciliationOutcome {
    CountsMatch {
        lot: InventoryLot,
        message: String,
    },
    #[serde(rename_all = "camelCase")]
    Adjusted {
        lot: InventoryLot,
        previous_count: u32,
        physical_count: u32,
        difference: i64,
        reason: AdjustmentReason,
        message: String,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LotDetail {
    pub lot: InventoryLot,
    pub days_until_expiry: i64,
    pub expiration_status: ExpirationStatus,
    pub expiration_message: String,
    pub stock_status: StockStatus,
    pub stock_message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: InventoryStats,
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub report_type: ReportType,
    #[serde(flatten)]
    pub date_range: DateRange,
}

/// A rendered CSV report plus where a copy was archived, when archiving is enabled.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDownload {
    #[serde(flatten)]
    pub export: CsvExport,
    pub archived_to: Option<String>,
}
