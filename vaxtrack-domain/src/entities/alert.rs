// Facility-level alert entity

use serde::{Deserialize, Serialize};

use crate::value_objects::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    ExpiredVaccines,
    ExpiringSoon,
    LowStock,
    OutOfStock,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::ExpiredVaccines => "expired-vaccines",
            AlertKind::ExpiringSoon => "expiring-soon",
            AlertKind::LowStock => "low-stock",
            AlertKind::OutOfStock => "out-of-stock",
        }
    }
}

/// Workflow the operator should move to next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertAction {
    ReportLoss,
    AdministerDoses,
    ReceiveShipment,
}

impl AlertAction {
    pub fn label(&self) -> &'static str {
        match self {
            AlertAction::ReportLoss => "Report Loss",
            AlertAction::AdministerDoses => "Administer Doses",
            AlertAction::ReceiveShipment => "Receive Shipment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: AlertKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub action: AlertAction,
    pub action_label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_vaccines: usize,
    pub total_doses: u64,
    pub expiring_soon: usize,
    pub expired: usize,
}
