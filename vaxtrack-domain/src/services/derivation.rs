use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::InventoryLot;
use crate::utils::{start_of_day_utc, DAY_MS};
use crate::value_objects::{ExpirationStatus, StockStatus};

pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

const CRITICAL_DAYS: i64 = 7;
const WARNING_DAYS: i64 = 30;

fn millis_until(expiration_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    start_of_day_utc(expiration_date)
        .signed_duration_since(now)
        .num_milliseconds()
}

/// Whole days until expiry, truncated toward zero. The expiry day itself stays at 0 until
/// it ends. Used for per-lot status and alerts.
pub fn days_until_expiry_trunc(expiration_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    millis_until(expiration_date, now) / DAY_MS
}

/// Days until expiry, rounded up. Used by query buckets, reports and dashboard stats.
pub fn days_until_expiry_ceil(expiration_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    -(-millis_until(expiration_date, now)).div_euclid(DAY_MS)
}

pub fn is_expired(expiration_date: NaiveDate, now: DateTime<Utc>) -> bool {
    start_of_day_utc(expiration_date) < now
}

pub fn expiration_status(expiration_date: NaiveDate, now: DateTime<Utc>) -> ExpirationStatus {
    let days = days_until_expiry_trunc(expiration_date, now);
    if days < 0 {
        ExpirationStatus::Expired
    } else if days <= CRITICAL_DAYS {
        ExpirationStatus::Critical
    } else if days <= WARNING_DAYS {
        ExpirationStatus::Warning
    } else {
        ExpirationStatus::Good
    }
}

pub fn stock_status(remaining_quantity: u32, threshold: u32) -> StockStatus {
    if remaining_quantity == 0 {
        StockStatus::Out
    } else if remaining_quantity <= threshold {
        StockStatus::Low
    } else {
        StockStatus::Good
    }
}

/// Lots that can still be drawn from: doses left and not yet past expiry.
pub fn is_available_for_administration(lot: &InventoryLot, now: DateTime<Utc>) -> bool {
    lot.remaining_quantity > 0 && start_of_day_utc(lot.expiration_date) > now
}
