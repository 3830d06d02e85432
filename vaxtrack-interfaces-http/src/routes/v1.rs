use axum::routing::{get, post};
use axum::Router;

use vaxtrack_application::AppState;

use crate::handlers::{inventory_handlers, ops_handlers, report_handlers, workflow_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/inventory", get(inventory_handlers::list_inventory))
        .route(
            "/v1/inventory/available",
            get(inventory_handlers::list_available_lots),
        )
        .route("/v1/inventory/:id", get(inventory_handlers::get_lot))
        .route("/v1/dashboard", get(inventory_handlers::get_dashboard))
        .route("/v1/alerts", get(inventory_handlers::list_alerts))
        .route("/v1/vaccines", get(inventory_handlers::list_vaccines))
        .route(
            "/v1/receiving",
            post(workflow_handlers::receive_shipment).get(workflow_handlers::list_receipts),
        )
        .route(
            "/v1/administrations",
            post(workflow_handlers::administer_doses).get(workflow_handlers::list_administrations),
        )
        .route(
            "/v1/losses",
            post(workflow_handlers::report_loss).get(workflow_handlers::list_losses),
        )
        .route(
            "/v1/reconciliation",
            post(workflow_handlers::reconcile_inventory),
        )
        .route("/v1/reports/:report_type", get(report_handlers::get_report))
        .route(
            "/v1/reports/:report_type/csv",
            get(report_handlers::export_report_csv),
        )
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use serde_json::{json, Value};
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    use vaxtrack_application::Metrics;
    use vaxtrack_domain::ports::FixedClock;
    use vaxtrack_domain::{
        AdministrationEvent, InventoryLot, LossEvent, LotStatus, ReceiptEvent, RecordId,
        RuntimeConfig, StoreLatency, VaccineCatalogEntry,
    };
    use vaxtrack_infrastructure::InMemoryRecordStore;

    use super::*;

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).expect("date") + Duration::days(offset)
    }

    fn lot(id: u64, name: &str, quantity: u32, remaining: u32, days: i64) -> InventoryLot {
        InventoryLot {
            id: RecordId(id),
            vaccine_id: RecordId(1),
            commercial_name: name.to_string(),
            generic_name: "Hep B".to_string(),
            lot_number: format!("LOT-{}", id),
            quantity,
            remaining_quantity: remaining,
            expiration_date: day(days),
            received_date: day(-30),
            status: LotStatus::Active,
        }
    }

    fn state(api_token: Option<&str>) -> AppState {
        let latency = StoreLatency::none();
        AppState {
            config: RuntimeConfig {
                api_token: api_token.map(str::to_string),
                ..RuntimeConfig::default()
            },
            inventory: Arc::new(InMemoryRecordStore::with_records(
                vec![
                    lot(1, "Engerix-B", 20, 5, 100),
                    lot(2, "Havrix", 12, 12, -3),
                    lot(3, "Heplisav", 30, 25, 20),
                ],
                latency,
            )),
            vaccines: Arc::new(InMemoryRecordStore::with_records(
                vec![VaccineCatalogEntry {
                    id: RecordId(1),
                    commercial_name: "Engerix-B".to_string(),
                    generic_name: "Hep B".to_string(),
                }],
                latency,
            )),
            administrations: Arc::new(InMemoryRecordStore::<AdministrationEvent>::new(latency)),
            losses: Arc::new(InMemoryRecordStore::<LossEvent>::new(latency)),
            receipts: Arc::new(InMemoryRecordStore::<ReceiptEvent>::new(latency)),
            clock: Arc::new(FixedClock(
                Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).single().expect("now"),
            )),
            report_archive: None,
            metrics: Arc::new(Metrics::default()),
            workflow_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.oneshot(request).await.expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, body.to_vec())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).expect("request")
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn json_body(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).expect("json body")
    }

    #[tokio::test]
    async fn inventory_query_string_filters_and_sorts() {
        let router = build_router(state(None));
        let (status, body) = send(
            router,
            get_request("/v1/inventory?searchTerm=h&sortBy=remainingQuantity_desc"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<String> = json_body(&body)
            .as_array()
            .expect("array")
            .iter()
            .map(|lot| lot["commercialName"].as_str().expect("name").to_string())
            .collect();
        assert_eq!(names, vec!["Heplisav", "Havrix", "Engerix-B"]);
    }

    #[tokio::test]
    async fn empty_filter_values_return_every_lot() {
        let router = build_router(state(None));
        let (status, body) = send(
            router.clone(),
            get_request("/v1/inventory?expirationStatus=&quantityRange=&sortBy="),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body).as_array().expect("array").len(), 3);

        let (status, _) = send(router, get_request("/v1/inventory?quantityRange=huge")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_lot_is_404() {
        let router = build_router(state(None));
        let (status, body) = send(router, get_request("/v1/inventory/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json_body(&body)["error"].is_string());
    }

    #[tokio::test]
    async fn available_route_is_not_shadowed_by_id() {
        let router = build_router(state(None));
        let (status, body) = send(router, get_request("/v1/inventory/available")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body).as_array().expect("array").len(), 2);
    }

    #[tokio::test]
    async fn administering_too_many_doses_is_400() {
        let router = build_router(state(None));
        let (status, body) = send(
            router,
            post_json(
                "/v1/administrations",
                json!({"inventoryId": 1, "ageGroup": "adults", "dosesAdministered": 9}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(&body)["error"],
            "Cannot administer more doses than available"
        );
    }

    #[tokio::test]
    async fn receiving_returns_created_lot() {
        let router = build_router(state(None));
        let (status, body) = send(
            router,
            post_json(
                "/v1/receiving",
                json!({
                    "vaccineId": 1,
                    "lotNumber": "EB-77",
                    "quantityReceived": 50,
                    "failedInspection": 2,
                    "expirationDate": "2026-06-01"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let body = json_body(&body);
        assert_eq!(body["lot"]["id"], 4);
        assert_eq!(body["lot"]["remainingQuantity"], 48);
    }

    #[tokio::test]
    async fn matching_reconciliation_reports_counts_match() {
        let router = build_router(state(None));
        let (status, body) = send(
            router,
            post_json("/v1/reconciliation", json!({"inventoryId": 1, "physicalCount": 5})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body)["outcome"], "counts_match");
    }

    #[tokio::test]
    async fn csv_export_sets_download_headers() {
        let router = build_router(state(None));
        let response = router
            .oneshot(get_request("/v1/reports/inventory/csv"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .expect("disposition")
            .to_str()
            .expect("ascii")
            .to_string();
        assert_eq!(
            disposition,
            "attachment; filename=\"inventory_report_2025-06-01.csv\""
        );
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let text = String::from_utf8(body.to_vec()).expect("utf8");
        assert_eq!(text.lines().count(), 4);
    }

    #[tokio::test]
    async fn token_is_enforced_when_configured() {
        let router = build_router(state(Some("s3cret")));
        let (status, _) = send(router.clone(), get_request("/v1/dashboard")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let request = Request::builder()
            .uri("/v1/dashboard")
            .header(header::AUTHORIZATION, "Bearer s3cret")
            .body(Body::empty())
            .expect("request");
        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body)["stats"]["totalVaccines"], 3);
    }

    #[tokio::test]
    async fn health_is_open() {
        let router = build_router(state(Some("s3cret")));
        let (status, _) = send(router, get_request("/v1/ops/health/live")).await;
        assert_eq!(status, StatusCode::OK);
    }
}
