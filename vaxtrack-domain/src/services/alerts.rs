use chrono::{DateTime, Utc};

use crate::entities::{Alert, AlertAction, AlertKind, InventoryLot, InventoryStats};
use crate::services::derivation::{days_until_expiry_ceil, days_until_expiry_trunc, is_expired};
use crate::value_objects::Severity;

const EXPIRING_SOON_DAYS: i64 = 30;

/// Scans a snapshot and returns facility alerts in fixed order: expired, expiring soon,
/// low stock, out of stock. A lot may feed several alerts.
pub fn generate_alerts(
    snapshot: &[InventoryLot],
    now: DateTime<Utc>,
    low_stock_threshold: u32,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    let expired = snapshot
        .iter()
        .filter(|lot| is_expired(lot.expiration_date, now))
        .count();
    if expired > 0 {
        alerts.push(Alert {
            id: AlertKind::ExpiredVaccines,
            severity: Severity::Critical,
            title: "Expired Vaccines Detected".to_string(),
            message: format!(
                "{} {} expired and should be removed from inventory.",
                expired,
                plural(expired, "vaccine has", "vaccines have")
            ),
            action: AlertAction::ReportLoss,
            action_label: AlertAction::ReportLoss.label().to_string(),
            count: expired,
        });
    }

    let expiring_soon = snapshot
        .iter()
        .filter(|lot| {
            let days = days_until_expiry_trunc(lot.expiration_date, now);
            days > 0 && days <= EXPIRING_SOON_DAYS
        })
        .count();
    if expiring_soon > 0 {
        alerts.push(Alert {
            id: AlertKind::ExpiringSoon,
            severity: Severity::Warning,
            title: "Vaccines Expiring Soon".to_string(),
            message: format!(
                "{} {} within 30 days. Plan administration accordingly.",
                expiring_soon,
                plural(expiring_soon, "vaccine expires", "vaccines expire")
            ),
            action: AlertAction::AdministerDoses,
            action_label: AlertAction::AdministerDoses.label().to_string(),
            count: expiring_soon,
        });
    }

    let low_stock = snapshot
        .iter()
        .filter(|lot| lot.remaining_quantity > 0 && lot.remaining_quantity <= low_stock_threshold)
        .count();
    if low_stock > 0 {
        alerts.push(Alert {
            id: AlertKind::LowStock,
            severity: Severity::Warning,
            title: "Low Stock Alert".to_string(),
            message: format!(
                "{} {} running low on stock. Consider reordering.",
                low_stock,
                plural(low_stock, "vaccine is", "vaccines are")
            ),
            action: AlertAction::ReceiveShipment,
            action_label: AlertAction::ReceiveShipment.label().to_string(),
            count: low_stock,
        });
    }

    let out_of_stock = snapshot
        .iter()
        .filter(|lot| lot.remaining_quantity == 0)
        .count();
    if out_of_stock > 0 {
        alerts.push(Alert {
            id: AlertKind::OutOfStock,
            severity: Severity::Critical,
            title: "Out of Stock".to_string(),
            message: format!(
                "{} {} completely out of stock.",
                out_of_stock,
                plural(out_of_stock, "vaccine is", "vaccines are")
            ),
            action: AlertAction::ReceiveShipment,
            action_label: AlertAction::ReceiveShipment.label().to_string(),
            count: out_of_stock,
        });
    }

    alerts
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count > 1 {
        many
    } else {
        one
    }
}

/// Dashboard headline numbers.
pub fn inventory_stats(snapshot: &[InventoryLot], now: DateTime<Utc>) -> InventoryStats {
    InventoryStats {
        total_vaccines: snapshot.len(),
        total_doses: snapshot
            .iter()
            .map(|lot| u64::from(lot.remaining_quantity))
            .sum(),
        expiring_soon: snapshot
            .iter()
            .filter(|lot| {
                let days = days_until_expiry_ceil(lot.expiration_date, now);
                days > 0 && days <= EXPIRING_SOON_DAYS
            })
            .count(),
        expired: snapshot
            .iter()
            .filter(|lot| is_expired(lot.expiration_date, now))
            .count(),
    }
}
