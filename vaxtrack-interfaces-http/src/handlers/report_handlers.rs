use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;

use vaxtrack_application::dtos::ReportRequest;
use vaxtrack_application::queries::report_queries;
use vaxtrack_application::AppState;
use vaxtrack_domain::{DateRange, ReportTable, ReportType};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn get_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(report_type): Path<ReportType>,
    Query(date_range): Query<DateRange>,
) -> Result<Json<ReportTable>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let request = ReportRequest {
        report_type,
        date_range,
    };
    let table = report_queries::generate_report(&state, request).await?;
    Ok(Json(table))
}

pub async fn export_report_csv(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(report_type): Path<ReportType>,
    Query(date_range): Query<DateRange>,
) -> Result<Response, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let request = ReportRequest {
        report_type,
        date_range,
    };
    let download = report_queries::export_report_csv(&state, request).await?;

    let disposition = format!("attachment; filename=\"{}\"", download.export.filename);
    let mut response_headers = HeaderMap::new();
    response_headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv; charset=utf-8"),
    );
    response_headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition).map_err(|err| HttpError::Internal(err.to_string()))?,
    );
    Ok((response_headers, download.export.content).into_response())
}
