// Loss event entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ports::Record;
use crate::value_objects::{LossReason, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LossEvent {
    pub id: RecordId,
    pub inventory_id: RecordId,
    pub quantity: u32,
    pub reason: LossReason,
    pub details: String,
    pub reported_date: NaiveDate,
    pub reported_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLossEvent {
    pub inventory_id: RecordId,
    pub quantity: u32,
    pub reason: LossReason,
    pub details: String,
    pub reported_date: NaiveDate,
    pub reported_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LossEventPatch {
    pub quantity: Option<u32>,
    pub reason: Option<LossReason>,
    pub details: Option<String>,
    pub reported_date: Option<NaiveDate>,
    pub reported_by: Option<String>,
}

impl Record for LossEvent {
    type Draft = NewLossEvent;
    type Patch = LossEventPatch;

    const COLLECTION: &'static str = "losses";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewLossEvent) -> Self {
        Self {
            id,
            inventory_id: draft.inventory_id,
            quantity: draft.quantity,
            reason: draft.reason,
            details: draft.details,
            reported_date: draft.reported_date,
            reported_by: draft.reported_by,
        }
    }

    fn apply_patch(&mut self, patch: LossEventPatch) {
        if let Some(value) = patch.quantity {
            self.quantity = value;
        }
        if let Some(value) = patch.reason {
            self.reason = value;
        }
        if let Some(value) = patch.details {
            self.details = value;
        }
        if let Some(value) = patch.reported_date {
            self.reported_date = value;
        }
        if let Some(value) = patch.reported_by {
            self.reported_by = value;
        }
    }
}
