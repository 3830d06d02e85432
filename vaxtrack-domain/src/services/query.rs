use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

use crate::entities::InventoryLot;
use crate::services::derivation::days_until_expiry_ceil;
use crate::value_objects::{ExpirationBucket, QuantityRange, SortDirection, SortField, SortSpec};

/// Inventory query. Every supplied field must match (AND); empty strings impose nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct InventoryCriteria {
    /// Case-insensitive substring of commercial name, generic name or lot number.
    pub search_term: Option<String>,
    /// Exact generic name.
    pub vaccine_family: Option<String>,
    /// Case-insensitive substring of the lot number.
    pub lot_number: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub expiration_status: Option<ExpirationBucket>,
    #[serde(deserialize_with = "blank_as_none")]
    pub quantity_range: Option<QuantityRange>,
    #[serde(deserialize_with = "blank_as_none")]
    pub sort_by: Option<SortSpec>,
}

// "All statuses" and "default order" arrive as "". Anything else must name a real value.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            T::deserialize(IntoDeserializer::<'de, D::Error>::into_deserializer(raw)).map(Some)
        }
        _ => Ok(None),
    }
}

impl InventoryCriteria {
    pub fn matches(&self, lot: &InventoryLot, now: DateTime<Utc>) -> bool {
        if let Some(term) = non_empty(&self.search_term) {
            let needle = term.to_lowercase();
            let hit = lot.commercial_name.to_lowercase().contains(&needle)
                || lot.generic_name.to_lowercase().contains(&needle)
                || lot.lot_number.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if let Some(family) = non_empty(&self.vaccine_family) {
            if lot.generic_name != family {
                return false;
            }
        }

        if let Some(lot_number) = non_empty(&self.lot_number) {
            if !lot
                .lot_number
                .to_lowercase()
                .contains(&lot_number.to_lowercase())
            {
                return false;
            }
        }

        if let Some(bucket) = self.expiration_status {
            if !bucket.contains(days_until_expiry_ceil(lot.expiration_date, now)) {
                return false;
            }
        }

        if let Some(range) = self.quantity_range {
            if !range.contains(lot.remaining_quantity) {
                return false;
            }
        }

        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Filters then sorts a snapshot. The snapshot itself is left untouched and without
/// `sort_by` the surviving lots keep their snapshot order.
pub fn query_inventory(
    snapshot: &[InventoryLot],
    criteria: &InventoryCriteria,
    now: DateTime<Utc>,
) -> Vec<InventoryLot> {
    let mut results = snapshot
        .iter()
        .filter(|lot| criteria.matches(lot, now))
        .cloned()
        .collect::<Vec<_>>();

    if let Some(sort) = criteria.sort_by {
        results.sort_by(|a, b| compare_lots(a, b, sort));
    }
    results
}

pub fn compare_lots(a: &InventoryLot, b: &InventoryLot, sort: SortSpec) -> Ordering {
    let ordering = match sort.field {
        SortField::RemainingQuantity => a.remaining_quantity.cmp(&b.remaining_quantity),
        SortField::ExpirationDate => a.expiration_date.cmp(&b.expiration_date),
        SortField::CommercialName => compare_text(&a.commercial_name, &b.commercial_name),
        SortField::GenericName => compare_text(&a.generic_name, &b.generic_name),
        SortField::LotNumber => compare_text(&a.lot_number, &b.lot_number),
    };
    match sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

// Case-insensitive first so "abc" and "ABD" order alphabetically, then case decides ties.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone};

    use crate::value_objects::{LotStatus, RecordId};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).single().expect("now")
    }

    fn lot(id: u64, name: &str, generic: &str, lot_number: &str, remaining: u32, days: i64) -> InventoryLot {
        let expiration: NaiveDate = (now() + Duration::days(days)).date_naive();
        InventoryLot {
            id: RecordId(id),
            vaccine_id: RecordId(id),
            commercial_name: name.to_string(),
            generic_name: generic.to_string(),
            lot_number: lot_number.to_string(),
            quantity: remaining.max(20),
            remaining_quantity: remaining,
            expiration_date: expiration,
            received_date: now().date_naive(),
            status: LotStatus::Active,
        }
    }

    fn snapshot() -> Vec<InventoryLot> {
        vec![
            lot(1, "Pediarix", "DTaP-IPV-Hib-Hep B", "PX2024A", 12, 200),
            lot(2, "Engerix-B", "Hep B", "EB9931", 0, 40),
            lot(3, "Havrix", "Hep A", "HV-77", 4, 10),
            lot(4, "ProQuad", "MMRV", "pq500", 25, -5),
            lot(5, "Daptacel", "DTaP", "DP1002", 8, 400),
        ]
    }

    fn ids(lots: &[InventoryLot]) -> Vec<u64> {
        lots.iter().map(|lot| lot.id.get()).collect()
    }

    #[test]
    fn empty_criteria_returns_snapshot_in_order() {
        let lots = snapshot();
        let results = query_inventory(&lots, &InventoryCriteria::default(), now());
        assert_eq!(results, lots);
    }

    #[test]
    fn search_term_matches_any_of_three_fields_case_insensitively() {
        let lots = snapshot();
        let by_name = InventoryCriteria {
            search_term: Some("HAVRIX".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&query_inventory(&lots, &by_name, now())), vec![3]);

        let by_generic = InventoryCriteria {
            search_term: Some("hep".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&query_inventory(&lots, &by_generic, now())), vec![1, 2, 3]);

        let by_lot = InventoryCriteria {
            search_term: Some("PQ5".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&query_inventory(&lots, &by_lot, now())), vec![4]);
    }

    #[test]
    fn vaccine_family_is_exact_match() {
        let lots = snapshot();
        let criteria = InventoryCriteria {
            vaccine_family: Some("DTaP".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&query_inventory(&lots, &criteria, now())), vec![5]);
    }

    #[test]
    fn blank_strings_impose_no_constraint() {
        let lots = snapshot();
        let criteria = InventoryCriteria {
            search_term: Some("   ".to_string()),
            lot_number: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(query_inventory(&lots, &criteria, now()).len(), lots.len());
    }

    #[test]
    fn blank_bucket_range_and_sort_mean_no_constraint() {
        let criteria: InventoryCriteria = serde_json::from_str(
            r#"{"expirationStatus":"","quantityRange":"  ","sortBy":""}"#,
        )
        .expect("criteria");
        assert_eq!(criteria, InventoryCriteria::default());

        let lots = snapshot();
        let ordered = query_inventory(&lots, &criteria, now());
        assert_eq!(ids(&ordered), ids(&lots));

        assert!(serde_json::from_str::<InventoryCriteria>(r#"{"expirationStatus":"soon"}"#).is_err());
        assert!(serde_json::from_str::<InventoryCriteria>(r#"{"sortBy":"lotNumber"}"#).is_err());
    }

    #[test]
    fn text_sort_ignores_case_then_puts_lowercase_first() {
        let lots = vec![
            lot(1, "b", "Hep B", "L1", 5, 50),
            lot(2, "B", "Hep B", "L2", 5, 50),
            lot(3, "a", "Hep B", "L3", 5, 50),
        ];
        let asc = InventoryCriteria {
            sort_by: Some("commercialName_asc".parse().expect("sort")),
            ..Default::default()
        };
        assert_eq!(ids(&query_inventory(&lots, &asc, now())), vec![3, 1, 2]);

        let mixed = vec![
            lot(1, "B", "Hep B", "L1", 5, 50),
            lot(2, "abd", "Hep B", "L2", 5, 50),
            lot(3, "ABC", "Hep B", "L3", 5, 50),
            lot(4, "b", "Hep B", "L4", 5, 50),
        ];
        assert_eq!(ids(&query_inventory(&mixed, &asc, now())), vec![3, 2, 4, 1]);
    }

    #[test]
    fn filters_compose_as_intersection() {
        let lots = snapshot();
        let singles = [
            InventoryCriteria {
                search_term: Some("hep".to_string()),
                ..Default::default()
            },
            InventoryCriteria {
                quantity_range: Some(QuantityRange::Low),
                ..Default::default()
            },
            InventoryCriteria {
                expiration_status: Some(ExpirationBucket::Expires30),
                ..Default::default()
            },
        ];
        let combined = InventoryCriteria {
            search_term: Some("hep".to_string()),
            quantity_range: Some(QuantityRange::Low),
            expiration_status: Some(ExpirationBucket::Expires30),
            ..Default::default()
        };

        let combined_ids = ids(&query_inventory(&lots, &combined, now()));
        let intersection = lots
            .iter()
            .filter(|lot| {
                singles
                    .iter()
                    .all(|single| ids(&query_inventory(&lots, single, now())).contains(&lot.id.get()))
            })
            .map(|lot| lot.id.get())
            .collect::<Vec<_>>();
        assert_eq!(combined_ids, intersection);
        assert_eq!(combined_ids, vec![3]);
    }

    #[test]
    fn lot_expiring_in_ten_days_is_in_every_upcoming_bucket() {
        let lots = vec![lot(1, "Havrix", "Hep A", "HV-77", 4, 10)];
        for bucket in [
            ExpirationBucket::Expires30,
            ExpirationBucket::Expires90,
            ExpirationBucket::Expires180,
            ExpirationBucket::Expires365,
        ] {
            let criteria = InventoryCriteria {
                expiration_status: Some(bucket),
                ..Default::default()
            };
            assert_eq!(query_inventory(&lots, &criteria, now()).len(), 1);
        }
        let expired = InventoryCriteria {
            expiration_status: Some(ExpirationBucket::Expired),
            ..Default::default()
        };
        assert!(query_inventory(&lots, &expired, now()).is_empty());
    }

    #[test]
    fn lot_expiring_in_exactly_thirty_days_is_in_expires_30() {
        let lots = vec![lot(1, "Havrix", "Hep A", "HV-77", 4, 30)];
        let criteria = InventoryCriteria {
            expiration_status: Some(ExpirationBucket::Expires30),
            ..Default::default()
        };
        assert_eq!(query_inventory(&lots, &criteria, now()).len(), 1);
    }

    #[test]
    fn sorts_numeric_date_and_text_fields() {
        let lots = snapshot();
        let by_quantity = InventoryCriteria {
            sort_by: Some("remainingQuantity_asc".parse().expect("sort")),
            ..Default::default()
        };
        assert_eq!(ids(&query_inventory(&lots, &by_quantity, now())), vec![2, 3, 5, 1, 4]);

        let by_expiry = InventoryCriteria {
            sort_by: Some("expirationDate_desc".parse().expect("sort")),
            ..Default::default()
        };
        assert_eq!(ids(&query_inventory(&lots, &by_expiry, now())), vec![5, 1, 2, 3, 4]);

        let by_lot = InventoryCriteria {
            sort_by: Some("lotNumber_asc".parse().expect("sort")),
            ..Default::default()
        };
        assert_eq!(ids(&query_inventory(&lots, &by_lot, now())), vec![5, 2, 3, 4, 1]);
    }

    #[test]
    fn sort_keeps_equal_keys_in_snapshot_order() {
        let lots = vec![
            lot(1, "A", "Hep B", "L1", 5, 50),
            lot(2, "B", "Hep B", "L2", 5, 50),
            lot(3, "C", "Hep B", "L3", 5, 50),
        ];
        let criteria = InventoryCriteria {
            sort_by: Some("genericName_desc".parse().expect("sort")),
            ..Default::default()
        };
        assert_eq!(ids(&query_inventory(&lots, &criteria, now())), vec![1, 2, 3]);
    }

    #[test]
    fn query_does_not_touch_the_snapshot() {
        let lots = snapshot();
        let before = lots.clone();
        let criteria = InventoryCriteria {
            sort_by: Some("commercialName_desc".parse().expect("sort")),
            ..Default::default()
        };
        let _ = query_inventory(&lots, &criteria, now());
        assert_eq!(lots, before);
    }

    #[test]
    fn criteria_reject_unknown_keys_and_values() {
        let ok: InventoryCriteria = serde_json::from_str(
            r#"{"searchTerm":"hep","expirationStatus":"expires_90","quantityRange":"medium","sortBy":"lotNumber_desc"}"#,
        )
        .expect("criteria");
        assert_eq!(ok.expiration_status, Some(ExpirationBucket::Expires90));
        assert_eq!(ok.quantity_range, Some(QuantityRange::Medium));
        assert_eq!(ok.sort_by.map(|sort| sort.to_string()).as_deref(), Some("lotNumber_desc"));

        assert!(serde_json::from_str::<InventoryCriteria>(r#"{"colour":"red"}"#).is_err());
        assert!(serde_json::from_str::<InventoryCriteria>(r#"{"quantityRange":"huge"}"#).is_err());
        assert!(serde_json::from_str::<InventoryCriteria>(r#"{"sortBy":"status_asc"}"#).is_err());
    }
}
