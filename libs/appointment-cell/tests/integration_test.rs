// libs/appointment-cell/tests/integration_test.rs

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use appointment_cell::router::appointment_routes;
use doctor_cell::router::doctor_routes;
use shared_utils::test_utils::test_state;

fn app() -> Router {
    let state = test_state();
    Router::new().nest(
        "/api",
        Router::new()
            .merge(doctor_routes(state.clone()))
            .merge(appointment_routes(state)),
    )
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn doctor_then_double_booking_scenario() {
    let app = app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/doctor/save",
        Some(json!({"name": "A", "dept": "Cardio", "ailments": ["x"], "timing": ["9-10"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, doctors) = send(&app, "GET", "/api/get/doctor-list", None).await;
    let doctor_id = doctors["data"][0]["_id"].as_str().unwrap().to_string();
    assert_eq!(doctors["data"][0]["name"], "A");

    let appointment = json!({
        "patientId": "p1",
        "patient": "P",
        "date": "2024-01-01",
        "slot": "9-10",
        "doctor": doctor_id,
        "createdBy": "p1"
    });

    let (status, first) = send(&app, "POST", "/api/save/appointment", Some(appointment.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["status"], "success");

    let (status, second) = send(&app, "POST", "/api/save/appointment", Some(appointment)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["status"], "booked");

    let (_, listed) = send(&app, "GET", "/api/get/appointments/p1", None).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
    assert_eq!(listed["data"][0]["doctor"]["name"], "A");
}

#[tokio::test]
async fn edit_and_delete_round_trip() {
    let app = app();
    let (_, doctor) = send(
        &app,
        "POST",
        "/api/doctor/save",
        Some(json!({"name": "A", "dept": "Cardio", "ailments": ["x"], "timing": ["9-10"]})),
    )
    .await;
    let doctor_id = doctor["data"]["_id"].as_str().unwrap().to_string();

    let (_, created) = send(
        &app,
        "POST",
        "/api/save/appointment",
        Some(json!({
            "patientId": "p2", "patient": "Q", "date": "2024-02-01",
            "slot": "9-10", "doctor": doctor_id, "createdBy": "p2"
        })),
    )
    .await;
    let id = created["data"]["_id"].as_str().unwrap().to_string();

    let (status, edited) = send(
        &app,
        "PUT",
        &format!("/api/edit/appointment/{id}"),
        Some(json!({
            "patientId": "p2", "patient": "Q", "date": "2024-02-01",
            "slot": "11-12", "doctor": doctor_id, "createdBy": "p2"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["status"], "success");

    let (status, deleted) = send(&app, "DELETE", &format!("/api/delete/appointment/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["status"], "success");

    let (_, fetched) = send(&app, "GET", &format!("/api/get/appointment/{id}"), None).await;
    assert_eq!(fetched, json!({"data": null, "status": "success"}));
}

#[tokio::test]
async fn save_without_required_fields_is_an_error() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/save/appointment",
        Some(json!({"patientId": "p1", "date": "2024-01-01"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert!(body["message"].is_string());
}
