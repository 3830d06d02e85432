// Inventory lot entity
// One received batch of a vaccine, identified by lot number + expiration date

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ports::Record;
use crate::value_objects::{LotStatus, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryLot {
    pub id: RecordId,
    pub vaccine_id: RecordId,
    pub commercial_name: String,
    pub generic_name: String,
    pub lot_number: String,
    /// Doses originally received.
    pub quantity: u32,
    pub remaining_quantity: u32,
    pub expiration_date: NaiveDate,
    pub received_date: NaiveDate,
    #[serde(default)]
    pub status: LotStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryLot {
    pub vaccine_id: RecordId,
    pub commercial_name: String,
    pub generic_name: String,
    pub lot_number: String,
    pub quantity: u32,
    pub remaining_quantity: u32,
    pub expiration_date: NaiveDate,
    pub received_date: NaiveDate,
    #[serde(default)]
    pub status: LotStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InventoryLotPatch {
    pub commercial_name: Option<String>,
    pub generic_name: Option<String>,
    pub lot_number: Option<String>,
    pub quantity: Option<u32>,
    pub remaining_quantity: Option<u32>,
    pub expiration_date: Option<NaiveDate>,
    pub received_date: Option<NaiveDate>,
    pub status: Option<LotStatus>,
}

impl InventoryLotPatch {
    pub fn remaining(remaining_quantity: u32) -> Self {
        Self {
            remaining_quantity: Some(remaining_quantity),
            ..Self::default()
        }
    }
}

impl Record for InventoryLot {
    type Draft = NewInventoryLot;
    type Patch = InventoryLotPatch;

    const COLLECTION: &'static str = "inventory";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewInventoryLot) -> Self {
        Self {
            id,
            vaccine_id: draft.vaccine_id,
            commercial_name: draft.commercial_name,
            generic_name: draft.generic_name,
            lot_number: draft.lot_number,
            quantity: draft.quantity,
            remaining_quantity: draft.remaining_quantity,
            expiration_date: draft.expiration_date,
            received_date: draft.received_date,
            status: draft.status,
        }
    }

    fn apply_patch(&mut self, patch: InventoryLotPatch) {
        if let Some(value) = patch.commercial_name {
            self.commercial_name = value;
        }
        if let Some(value) = patch.generic_name {
            self.generic_name = value;
        }
        if let Some(value) = patch.lot_number {
            self.lot_number = value;
        }
        if let Some(value) = patch.quantity {
            self.quantity = value;
        }
        if let Some(value) = patch.remaining_quantity {
            self.remaining_quantity = value;
        }
        if let Some(value) = patch.expiration_date {
            self.expiration_date = value;
        }
        if let Some(value) = patch.received_date {
            self.received_date = value;
        }
        if let Some(value) = patch.status {
            self.status = value;
        }
    }

    fn check_invariants(&self) -> Result<(), String> {
        if self.remaining_quantity > self.quantity {
            return Err(format!(
                "remaining quantity {} exceeds received quantity {} for lot {}",
                self.remaining_quantity, self.quantity, self.lot_number
            ));
        }
        Ok(())
    }
}
