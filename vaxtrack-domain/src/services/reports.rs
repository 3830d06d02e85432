use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{AdministrationEvent, InventoryLot, ReportTable, ReportType};
use crate::services::derivation::days_until_expiry_ceil;
use crate::utils::{format_display_date, start_of_day_utc};

const EXPIRATION_WINDOW_DAYS: i64 = 30;
const UNKNOWN: &str = "Unknown";

/// Inclusive administration date filter, applied only when both ends are given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => date >= start && date <= end,
            _ => true,
        }
    }
}

type Row = Vec<(&'static str, String)>;

fn into_table(report_type: ReportType, rows: Vec<Row>) -> ReportTable {
    let columns = rows
        .first()
        .map(|row| row.iter().map(|(key, _)| key.to_string()).collect())
        .unwrap_or_default();
    let rows = rows
        .into_iter()
        .map(|row| row.into_iter().map(|(_, value)| value).collect())
        .collect();
    ReportTable {
        report_type,
        columns,
        rows,
    }
}

pub fn inventory_report(
    snapshot: &[InventoryLot],
    now: DateTime<Utc>,
    low_stock_threshold: u32,
) -> ReportTable {
    let rows = snapshot
        .iter()
        .map(|lot| {
            vec![
                ("vaccine", lot.commercial_name.clone()),
                ("genericName", lot.generic_name.clone()),
                ("lotNumber", lot.lot_number.clone()),
                ("expirationDate", format_display_date(lot.expiration_date)),
                ("quantityOnHand", lot.remaining_quantity.to_string()),
                (
                    "status",
                    inventory_status(lot, now, low_stock_threshold).to_string(),
                ),
            ]
        })
        .collect();
    into_table(ReportType::Inventory, rows)
}

fn inventory_status(lot: &InventoryLot, now: DateTime<Utc>, low_stock_threshold: u32) -> &'static str {
    let days = days_until_expiry_ceil(lot.expiration_date, now);
    if days < 0 {
        "Expired"
    } else if days <= EXPIRATION_WINDOW_DAYS {
        "Expiring Soon"
    } else if lot.remaining_quantity <= low_stock_threshold {
        "Low Stock"
    } else {
        "Good"
    }
}

pub fn administration_report(
    administrations: &[AdministrationEvent],
    inventory: &[InventoryLot],
    range: DateRange,
) -> ReportTable {
    let rows = administrations
        .iter()
        .filter(|event| range.contains(event.administered_date))
        .map(|event| {
            let lot = inventory.iter().find(|lot| lot.id == event.inventory_id);
            vec![
                (
                    "vaccine",
                    lot.map(|lot| lot.commercial_name.clone())
                        .unwrap_or_else(|| UNKNOWN.to_string()),
                ),
                (
                    "lotNumber",
                    lot.map(|lot| lot.lot_number.clone())
                        .unwrap_or_else(|| UNKNOWN.to_string()),
                ),
                ("ageGroup", event.age_group.as_str().to_string()),
                ("dosesAdministered", event.doses_administered.to_string()),
                ("administeredDate", format_display_date(event.administered_date)),
                ("administeredBy", event.administered_by.clone()),
            ]
        })
        .collect();
    into_table(ReportType::Administration, rows)
}

/// Lots expiring within 30 days (or already expired), soonest first.
pub fn expiration_report(snapshot: &[InventoryLot], now: DateTime<Utc>) -> ReportTable {
    let horizon = now + Duration::days(EXPIRATION_WINDOW_DAYS);
    let mut entries = snapshot
        .iter()
        .filter(|lot| start_of_day_utc(lot.expiration_date) <= horizon)
        .map(|lot| (days_until_expiry_ceil(lot.expiration_date, now), lot))
        .collect::<Vec<_>>();
    entries.sort_by_key(|(days, _)| *days);

    let rows = entries
        .into_iter()
        .map(|(days, lot)| {
            vec![
                ("vaccine", lot.commercial_name.clone()),
                ("genericName", lot.generic_name.clone()),
                ("lotNumber", lot.lot_number.clone()),
                ("expirationDate", format_display_date(lot.expiration_date)),
                ("quantityOnHand", lot.remaining_quantity.to_string()),
                ("daysUntilExpiry", days.to_string()),
                ("status", expiration_label(days).to_string()),
            ]
        })
        .collect();
    into_table(ReportType::Expiration, rows)
}

fn expiration_label(days: i64) -> &'static str {
    if days < 0 {
        "Expired"
    } else if days <= 7 {
        "Critical"
    } else if days <= EXPIRATION_WINDOW_DAYS {
        "Warning"
    } else {
        "Good"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::value_objects::{AgeGroup, LotStatus, RecordId};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).single().expect("now")
    }

    fn day(offset: i64) -> NaiveDate {
        (now() + Duration::days(offset)).date_naive()
    }

    fn lot(id: u64, name: &str, remaining: u32, days: i64) -> InventoryLot {
        InventoryLot {
            id: RecordId(id),
            vaccine_id: RecordId(1),
            commercial_name: name.to_string(),
            generic_name: "Hep B".to_string(),
            lot_number: format!("L{}", id),
            quantity: 100,
            remaining_quantity: remaining,
            expiration_date: day(days),
            received_date: day(-30),
            status: LotStatus::Active,
        }
    }

    fn administration(id: u64, inventory_id: u64, offset: i64) -> AdministrationEvent {
        AdministrationEvent {
            id: RecordId(id),
            inventory_id: RecordId(inventory_id),
            age_group: AgeGroup::Children,
            doses_administered: 2,
            administered_date: day(offset),
            administered_by: "Nurse Lee".to_string(),
        }
    }

    #[test]
    fn inventory_report_columns_and_statuses() {
        let snapshot = vec![
            lot(1, "Engerix-B", 40, -1),
            lot(2, "Recombivax", 40, 20),
            lot(3, "Heplisav", 4, 100),
            lot(4, "PreHevbrio", 40, 100),
        ];
        let table = inventory_report(&snapshot, now(), 10);
        assert_eq!(
            table.columns,
            vec!["vaccine", "genericName", "lotNumber", "expirationDate", "quantityOnHand", "status"]
        );
        let statuses = table.rows.iter().map(|row| row[5].as_str()).collect::<Vec<_>>();
        assert_eq!(statuses, vec!["Expired", "Expiring Soon", "Low Stock", "Good"]);
        assert_eq!(table.rows[0][3], "May 31, 2025");
    }

    #[test]
    fn empty_report_has_no_columns() {
        let table = inventory_report(&[], now(), 10);
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }

    #[test]
    fn administration_report_resolves_lots_and_applies_full_range_only() {
        let inventory = vec![lot(1, "Engerix-B", 40, 100)];
        let events = vec![administration(1, 1, -10), administration(2, 99, -2)];

        let all = administration_report(&events, &inventory, DateRange::default());
        assert_eq!(all.rows.len(), 2);
        assert_eq!(all.rows[0][0], "Engerix-B");
        assert_eq!(all.rows[1][0], "Unknown");
        assert_eq!(all.rows[1][1], "Unknown");
        assert_eq!(all.rows[0][2], "children");

        let half_open = DateRange {
            start_date: Some(day(-5)),
            end_date: None,
        };
        assert_eq!(administration_report(&events, &inventory, half_open).rows.len(), 2);

        let window = DateRange {
            start_date: Some(day(-5)),
            end_date: Some(day(-2)),
        };
        let filtered = administration_report(&events, &inventory, window);
        assert_eq!(filtered.rows.len(), 1);
        assert_eq!(filtered.rows[0][0], "Unknown");
    }

    #[test]
    fn expiration_report_keeps_window_and_sorts_soonest_first() {
        let snapshot = vec![
            lot(1, "Later", 10, 25),
            lot(2, "Gone", 10, -3),
            lot(3, "Far", 10, 31),
            lot(4, "Soon", 10, 5),
            lot(5, "Edge", 10, 30),
        ];
        let table = expiration_report(&snapshot, now());
        let names = table.rows.iter().map(|row| row[0].as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Gone", "Soon", "Later", "Edge"]);
        let statuses = table.rows.iter().map(|row| row[6].as_str()).collect::<Vec<_>>();
        assert_eq!(statuses, vec!["Expired", "Critical", "Warning", "Warning"]);
        assert_eq!(table.rows[0][5], "-3");
    }
}
