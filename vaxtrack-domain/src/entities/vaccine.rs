// Vaccine catalog entry (static reference data)

use serde::{Deserialize, Serialize};

use crate::ports::Record;
use crate::value_objects::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccineCatalogEntry {
    pub id: RecordId,
    pub commercial_name: String,
    pub generic_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVaccineCatalogEntry {
    pub commercial_name: String,
    pub generic_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VaccineCatalogPatch {
    pub commercial_name: Option<String>,
    pub generic_name: Option<String>,
}

impl Record for VaccineCatalogEntry {
    type Draft = NewVaccineCatalogEntry;
    type Patch = VaccineCatalogPatch;

    const COLLECTION: &'static str = "vaccines";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewVaccineCatalogEntry) -> Self {
        Self {
            id,
            commercial_name: draft.commercial_name,
            generic_name: draft.generic_name,
        }
    }

    fn apply_patch(&mut self, patch: VaccineCatalogPatch) {
        if let Some(value) = patch.commercial_name {
            self.commercial_name = value;
        }
        if let Some(value) = patch.generic_name {
            self.generic_name = value;
        }
    }
}
