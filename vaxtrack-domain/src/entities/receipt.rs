// Receipt event entity
// Records what a shipment claimed to contain versus what passed inspection

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ports::Record;
use crate::value_objects::{DiscrepancyReason, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptEvent {
    pub id: RecordId,
    pub vaccine_id: RecordId,
    pub lot_number: String,
    pub quantity_sent: u32,
    pub quantity_received: u32,
    pub passed_inspection: u32,
    pub failed_inspection: u32,
    pub discrepancy_reason: Option<DiscrepancyReason>,
    pub expiration_date: NaiveDate,
    pub received_date: NaiveDate,
    pub received_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReceiptEvent {
    pub vaccine_id: RecordId,
    pub lot_number: String,
    pub quantity_sent: u32,
    pub quantity_received: u32,
    pub passed_inspection: u32,
    pub failed_inspection: u32,
    pub discrepancy_reason: Option<DiscrepancyReason>,
    pub expiration_date: NaiveDate,
    pub received_date: NaiveDate,
    pub received_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReceiptEventPatch {
    pub lot_number: Option<String>,
    pub quantity_sent: Option<u32>,
    pub discrepancy_reason: Option<DiscrepancyReason>,
    pub received_by: Option<String>,
}

/// Doses that passed inspection: received minus failed, floored at zero.
pub fn passed_inspection(quantity_received: u32, failed_inspection: u32) -> u32 {
    quantity_received.saturating_sub(failed_inspection)
}

impl Record for ReceiptEvent {
    type Draft = NewReceiptEvent;
    type Patch = ReceiptEventPatch;

    const COLLECTION: &'static str = "receipts";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewReceiptEvent) -> Self {
        Self {
            id,
            vaccine_id: draft.vaccine_id,
            lot_number: draft.lot_number,
            quantity_sent: draft.quantity_sent,
            quantity_received: draft.quantity_received,
            passed_inspection: draft.passed_inspection,
            failed_inspection: draft.failed_inspection,
            discrepancy_reason: draft.discrepancy_reason,
            expiration_date: draft.expiration_date,
            received_date: draft.received_date,
            received_by: draft.received_by,
        }
    }

    fn apply_patch(&mut self, patch: ReceiptEventPatch) {
        if let Some(value) = patch.lot_number {
            self.lot_number = value;
        }
        if let Some(value) = patch.quantity_sent {
            self.quantity_sent = value;
        }
        if let Some(value) = patch.discrepancy_reason {
            self.discrepancy_reason = Some(value);
        }
        if let Some(value) = patch.received_by {
            self.received_by = value;
        }
    }
}
