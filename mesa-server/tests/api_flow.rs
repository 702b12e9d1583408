//! API integration tests
//!
//! Drives the full router in-process as a tower service, no network
//! stack involved.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use mesa_server::core::{Config, ServerState};
use shared::models::RestaurantConfig;

fn test_config() -> Config {
    Config {
        http_port: 0,
        environment: "test".to_string(),
        log_level: "warn".to_string(),
        log_dir: None,
        restaurant: RestaurantConfig::default(),
    }
}

fn test_app() -> (ServerState, Router) {
    let state = ServerState::initialize(&test_config());
    let app = mesa_server::api::build_app().with_state(state.clone());
    (state, app)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn booking_payload(time: &str, guests: u32, name: &str) -> Value {
    json!({
        "date": "2030-06-01",
        "time": time,
        "guests": guests,
        "name": name,
        "phone": null,
        "notes": null,
    })
}

#[tokio::test]
async fn health_reports_healthy() {
    let (_state, app) = test_app();

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, get("/health/detailed")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["zone_catalog"]["status"], "ok");
}

#[tokio::test]
async fn availability_empty_day_returns_full_grid() {
    let (_state, app) = test_app();

    let (status, body) = send(&app, get("/api/availability?date=2030-06-01&guests=2")).await;

    assert_eq!(status, StatusCode::OK);
    let slots = body["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 21);
    assert_eq!(slots[0]["time"], "12:00");
    assert_eq!(slots[20]["time"], "22:00");
    assert!(slots.iter().all(|s| s["available"] == true));
    assert!(slots.iter().all(|s| s["tablesLeft"] == 10));
}

#[tokio::test]
async fn availability_rejects_bad_input() {
    let (_state, app) = test_app();

    let (status, body) = send(&app, get("/api/availability?date=June+1st&guests=2")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    let (status, _) = send(&app, get("/api/availability?date=2030-06-01&guests=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn booking_occupies_and_cancel_frees_capacity() {
    let (_state, app) = test_app();

    let (status, created) = send(
        &app,
        json_request("POST", "/api/bookings", booking_payload("12:00", 6, "Ana")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["status"], "pending");
    let id = created["id"].as_str().unwrap().to_string();

    // 6 guests = 2 table units, held through 13:00, free again at 13:30
    let (_, body) = send(&app, get("/api/availability?date=2030-06-01&guests=1")).await;
    let slots = body["slots"].as_array().unwrap();
    let slot = |t: &str| {
        slots
            .iter()
            .find(|s| s["time"] == t)
            .unwrap_or_else(|| panic!("slot {} missing", t))
    };
    assert_eq!(slot("12:00")["tablesLeft"], 8);
    assert_eq!(slot("13:00")["tablesLeft"], 8);
    assert_eq!(slot("13:30")["tablesLeft"], 10);

    // Confirm, then cancel
    let uri = format!("/api/bookings/{}/status", id);
    let (status, body) = send(&app, json_request("PUT", &uri, json!({"status": "confirmed"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "confirmed");

    let (status, _) = send(&app, json_request("PUT", &uri, json!({"status": "cancelled"}))).await;
    assert_eq!(status, StatusCode::OK);

    // Cancelled bookings stop counting immediately
    let (_, body) = send(&app, get("/api/availability?date=2030-06-01&guests=1")).await;
    let slots = body["slots"].as_array().unwrap();
    let noon = slots.iter().find(|s| s["time"] == "12:00").unwrap();
    assert_eq!(noon["tablesLeft"], 10);

    // Cancelled is terminal
    let (status, body) = send(&app, json_request("PUT", &uri, json!({"status": "confirmed"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "E0005");
}

#[tokio::test]
async fn booking_rejected_when_slot_full_or_off_grid() {
    let (_state, app) = test_app();

    // Five 8-guest parties consume all 10 table units at 18:00
    for i in 0..5 {
        let (status, _) = send(
            &app,
            json_request(
                "POST",
                "/api/bookings",
                booking_payload("18:00", 8, &format!("Party {}", i)),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(
        &app,
        json_request("POST", "/api/bookings", booking_payload("18:00", 2, "Late")),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "E0005");

    // Off-grid time: not an offerable slot
    let (status, _) = send(
        &app,
        json_request("POST", "/api/bookings", booking_payload("18:15", 2, "Odd")),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Malformed time is a validation error, not a business one
    let (status, body) = send(
        &app,
        json_request("POST", "/api/bookings", booking_payload("evening", 2, "Vague")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn delivery_quote_follows_rush_toggle() {
    let (_state, app) = test_app();

    // Rush off: standard tier quotes its base fee
    let (status, body) = send(&app, get("/api/delivery/quote?subtotal=100")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isRushMode"], false);
    let standard = body["zones"]
        .as_array()
        .unwrap()
        .iter()
        .find(|z| z["id"] == "standard")
        .unwrap()
        .clone();
    assert_eq!(standard["fee"], 25.0);
    assert_eq!(standard["isSurge"], false);

    // Toggle rush on (idempotently, twice)
    for _ in 0..2 {
        let (status, body) = send(
            &app,
            json_request("POST", "/api/delivery/rush", json!({"rushMode": true})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rushMode"], true);
    }

    // ceil(25 * 1.5) = 38
    let (_, body) = send(&app, get("/api/delivery/quote?subtotal=100")).await;
    assert_eq!(body["isRushMode"], true);
    assert_eq!(body["multiplier"], 1.5);
    let standard = body["zones"]
        .as_array()
        .unwrap()
        .iter()
        .find(|z| z["id"] == "standard")
        .unwrap()
        .clone();
    assert_eq!(standard["fee"], 38.0);
    assert_eq!(standard["isSurge"], true);

    // Free threshold beats surge at 160 ≥ 150
    let (_, body) = send(&app, get("/api/delivery/quote?subtotal=160")).await;
    let zones = body["zones"].as_array().unwrap();
    let standard = zones.iter().find(|z| z["id"] == "standard").unwrap();
    assert_eq!(standard["fee"], 0.0);
    assert_eq!(standard["isSurge"], false);
    // Far tier has no threshold and keeps surging: ceil(40 * 1.5) = 60
    let far = zones.iter().find(|z| z["id"] == "far").unwrap();
    assert_eq!(far["fee"], 60.0);
    assert_eq!(far["eligible"], true);
}

#[tokio::test]
async fn delivery_quote_minimum_order_gate() {
    let (_state, app) = test_app();

    let (_, body) = send(&app, get("/api/delivery/quote?subtotal=60")).await;
    let zones = body["zones"].as_array().unwrap();
    let far = zones.iter().find(|z| z["id"] == "far").unwrap();

    assert_eq!(far["eligible"], false);
    assert_eq!(far["reason"], "below minimum order");
    // Fee is still quoted for display
    assert_eq!(far["fee"], 40.0);

    let (status, _) = send(&app, get("/api/delivery/quote?subtotal=-5")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn zone_admin_roundtrip() {
    let (_state, app) = test_app();

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/api/zones",
            json!({"name": "Island", "fee": 55.0, "minOrder": 150.0, "freeDeliveryThreshold": 300.0}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();

    // Threshold below minimum order is a config mistake
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/zones",
            json!({"name": "Broken", "fee": 10.0, "minOrder": 100.0, "freeDeliveryThreshold": 80.0}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/zones/{}", id),
            json!({"fee": 60.0}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fee"], 60.0);
    assert_eq!(body["minOrder"], 150.0);

    let (status, _) = send(&app, get("/api/zones/unknown-zone")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/zones/{}", id))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(true));
}
