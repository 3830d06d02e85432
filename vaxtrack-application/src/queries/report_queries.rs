use tracing::{info, warn};

use vaxtrack_domain::{
    administration_report, expiration_report, export_csv, inventory_report, ReportTable,
    ReportType,
};

use crate::dtos::{ReportDownload, ReportRequest};
use crate::error::store_failure;
use crate::{AppError, AppState};

pub async fn generate_report(
    state: &AppState,
    request: ReportRequest,
) -> Result<ReportTable, AppError> {
    let now = state.clock.now();
    let inventory = state
        .inventory
        .get_all()
        .await
        .map_err(store_failure("load inventory for report"))?;

    let table = match request.report_type {
        ReportType::Inventory => {
            inventory_report(&inventory, now, state.config.low_stock_threshold)
        }
        ReportType::Administration => {
            let administrations = state
                .administrations
                .get_all()
                .await
                .map_err(store_failure("load administrations for report"))?;
            administration_report(&administrations, &inventory, request.date_range)
        }
        ReportType::Expiration => expiration_report(&inventory, now),
    };
    Ok(table)
}

/// Renders a report as CSV and, when an archive is configured, keeps a copy of it.
///
/// A failed archive write is logged and does not block the download.
pub async fn export_report_csv(
    state: &AppState,
    request: ReportRequest,
) -> Result<ReportDownload, AppError> {
    let table = generate_report(state, request).await?;
    let export = export_csv(&table, state.config.csv_mode, state.clock.today())?;

    let archived_to = match &state.report_archive {
        Some(archive) => match archive.save_csv(&export).await {
            Ok(location) => Some(location),
            Err(err) => {
                warn!("failed to archive {}: {}", export.filename, err);
                None
            }
        },
        None => None,
    };

    info!(
        report = request.report_type.as_str(),
        rows = table.rows.len(),
        filename = %export.filename,
        "report exported"
    );
    Ok(ReportDownload {
        export,
        archived_to,
    })
}
