// =====================================================================================
// MONITORING CELL INTEGRATION TESTS
// =====================================================================================

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use monitoring_cell::{create_monitoring_router, HealthMonitorService, HealthStatus};
use shared_utils::test_utils::test_state;

#[tokio::test]
async fn health_endpoint_reports_healthy_database() {
    let app = create_monitoring_router(test_state());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "up");
    assert_eq!(body["backend"], "memory");
    assert_eq!(body["database_name"], "appoint_test");
}

#[tokio::test]
async fn service_check_includes_uptime() {
    let state = test_state();
    let service = HealthMonitorService::new(state.db.clone(), "appoint_test");

    let health = service.check_database_health().await.unwrap();

    assert_eq!(health.status, HealthStatus::Healthy);
    assert!(health.uptime_seconds < 60);
}
