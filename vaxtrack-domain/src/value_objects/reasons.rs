// Enumerated form values: age groups and the reason codes attached to stock movements

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Infants,
    Toddlers,
    Children,
    Adolescents,
    Adults,
    Seniors,
}

impl AgeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Infants => "infants",
            AgeGroup::Toddlers => "toddlers",
            AgeGroup::Children => "children",
            AgeGroup::Adolescents => "adolescents",
            AgeGroup::Adults => "adults",
            AgeGroup::Seniors => "seniors",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Infants => "Infants (0-12 months)",
            AgeGroup::Toddlers => "Toddlers (1-3 years)",
            AgeGroup::Children => "Children (4-11 years)",
            AgeGroup::Adolescents => "Adolescents (12-17 years)",
            AgeGroup::Adults => "Adults (18-64 years)",
            AgeGroup::Seniors => "Seniors (65+ years)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossReason {
    Expired,
    Damaged,
    TemperatureExcursion,
    Contamination,
    Spilled,
    PowerOutage,
    EquipmentFailure,
    HumanError,
    Other,
}

impl LossReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            LossReason::Expired => "expired",
            LossReason::Damaged => "damaged",
            LossReason::TemperatureExcursion => "temperature_excursion",
            LossReason::Contamination => "contamination",
            LossReason::Spilled => "spilled",
            LossReason::PowerOutage => "power_outage",
            LossReason::EquipmentFailure => "equipment_failure",
            LossReason::HumanError => "human_error",
            LossReason::Other => "other",
        }
    }
}

/// Why the received count differs from what the shipment said it contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyReason {
    DamagedPackaging,
    BrokenVials,
    TemperatureExcursion,
    ExpiredOnArrival,
    QuantityMismatch,
    LabelingError,
    Other,
}

impl DiscrepancyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscrepancyReason::DamagedPackaging => "damaged_packaging",
            DiscrepancyReason::BrokenVials => "broken_vials",
            DiscrepancyReason::TemperatureExcursion => "temperature_excursion",
            DiscrepancyReason::ExpiredOnArrival => "expired_on_arrival",
            DiscrepancyReason::QuantityMismatch => "quantity_mismatch",
            DiscrepancyReason::LabelingError => "labeling_error",
            DiscrepancyReason::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentReason {
    PhysicalCountError,
    DosesExpired,
    DosesDamaged,
    DosesWasted,
    SystemError,
    TemperatureExcursion,
    Other,
}

impl AdjustmentReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentReason::PhysicalCountError => "physical_count_error",
            AdjustmentReason::DosesExpired => "doses_expired",
            AdjustmentReason::DosesDamaged => "doses_damaged",
            AdjustmentReason::DosesWasted => "doses_wasted",
            AdjustmentReason::SystemError => "system_error",
            AdjustmentReason::TemperatureExcursion => "temperature_excursion",
            AdjustmentReason::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_use_snake_case_on_the_wire() {
        let reason: LossReason = serde_json::from_str("\"temperature_excursion\"").expect("reason");
        assert_eq!(reason, LossReason::TemperatureExcursion);
        let group = serde_json::to_string(&AgeGroup::Adolescents).expect("json");
        assert_eq!(group, "\"adolescents\"");
        assert_eq!(AdjustmentReason::DosesWasted.as_str(), "doses_wasted");
    }

    #[test]
    fn unknown_reason_is_rejected() {
        assert!(serde_json::from_str::<DiscrepancyReason>("\"lost_in_transit\"").is_err());
    }
}
