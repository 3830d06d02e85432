use chrono::NaiveDate;
use thiserror::Error;

use crate::entities::{CsvExport, CsvMode, ReportTable, ReportType};

#[derive(Debug, Error)]
pub enum CsvExportError {
    #[error("No data to export")]
    NoData,
    #[error("csv encoding failed: {0}")]
    Encode(#[from] anyhow::Error),
}

/// `{reportType}_report_{YYYY-MM-DD}.csv`
pub fn csv_filename(report_type: ReportType, today: NaiveDate) -> String {
    format!("{}_report_{}.csv", report_type.as_str(), today.format("%Y-%m-%d"))
}

pub fn export_csv(
    table: &ReportTable,
    mode: CsvMode,
    today: NaiveDate,
) -> Result<CsvExport, CsvExportError> {
    Ok(CsvExport {
        filename: csv_filename(table.report_type, today),
        content: render_csv(table, mode)?,
    })
}

/// Header line is the report's column list; rows follow in display order.
pub fn render_csv(table: &ReportTable, mode: CsvMode) -> Result<String, CsvExportError> {
    if table.is_empty() {
        return Err(CsvExportError::NoData);
    }
    match mode {
        CsvMode::Raw => Ok(render_raw(table)),
        CsvMode::Quoted => render_quoted(table).map_err(CsvExportError::Encode),
    }
}

// Values are written verbatim: a comma inside a value shifts the columns after it.
fn render_raw(table: &ReportTable) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    lines.push(table.columns.join(","));
    for row in &table.rows {
        lines.push(row.join(","));
    }
    lines.join("\n")
}

fn render_quoted(table: &ReportTable) -> anyhow::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("flush csv buffer: {}", err))?;
    Ok(String::from_utf8(bytes)?)
}
