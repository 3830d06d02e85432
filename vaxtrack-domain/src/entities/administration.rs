// Administration event entity
// One sitting in which doses from a single lot were given to an age group

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ports::Record;
use crate::value_objects::{AgeGroup, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministrationEvent {
    pub id: RecordId,
    pub inventory_id: RecordId,
    pub age_group: AgeGroup,
    pub doses_administered: u32,
    pub administered_date: NaiveDate,
    pub administered_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdministrationEvent {
    pub inventory_id: RecordId,
    pub age_group: AgeGroup,
    pub doses_administered: u32,
    pub administered_date: NaiveDate,
    pub administered_by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdministrationEventPatch {
    pub age_group: Option<AgeGroup>,
    pub doses_administered: Option<u32>,
    pub administered_date: Option<NaiveDate>,
    pub administered_by: Option<String>,
}

impl Record for AdministrationEvent {
    type Draft = NewAdministrationEvent;
    type Patch = AdministrationEventPatch;

    const COLLECTION: &'static str = "administrations";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewAdministrationEvent) -> Self {
        Self {
            id,
            inventory_id: draft.inventory_id,
            age_group: draft.age_group,
            doses_administered: draft.doses_administered,
            administered_date: draft.administered_date,
            administered_by: draft.administered_by,
        }
    }

    fn apply_patch(&mut self, patch: AdministrationEventPatch) {
        if let Some(value) = patch.age_group {
            self.age_group = value;
        }
        if let Some(value) = patch.doses_administered {
            self.doses_administered = value;
        }
        if let Some(value) = patch.administered_date {
            self.administered_date = value;
        }
        if let Some(value) = patch.administered_by {
            self.administered_by = value;
        }
    }
}
