//! End-to-end API tests against the in-process router

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use menu_server::api;
use menu_server::core::{Config, ServerState};
use serde_json::{Value, json};
use tower::ServiceExt;

/// App wired against the embedded demo seed
fn app() -> Router {
    let config = Config::default();
    let state = ServerState::initialize(&config).expect("state init");
    api::build_app(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn open_session(app: &Router, table: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/sessions",
        Some(json!({ "restaurant_slug": "golden-wok", "table_id": table })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["session_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn full_order_flow() {
    let app = app();
    let session_id = open_session(&app, "5").await;

    // Create: (200.00 + 50.00) * 1 + 135.00 * 2 = 520.00, 5% tax = 26.00
    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "session_id": session_id,
            "table_id": "5",
            "items": [
                { "item_id": 201, "quantity": 1, "modifier_ids": [2001] },
                { "item_id": 401, "quantity": 2 }
            ],
            "payment": { "method": "cash" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["total_amount"].as_f64().unwrap(), 546.0);
    let order_id = body["order_id"].as_u64().unwrap();

    // Append a 40.00 soda: subtotal 560.00, tax 28.00, total 588.00
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/orders/{order_id}"),
        Some(json!({ "items": [{ "item_id": 402, "quantity": 1 }] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subtotal"].as_f64().unwrap(), 560.0);
    assert_eq!(body["tax"].as_f64().unwrap(), 28.0);
    assert_eq!(body["total_amount"].as_f64().unwrap(), 588.0);

    // Admin listing sees one order with all three lines
    let (status, body) = send(
        &app,
        "GET",
        "/api/orders?admin_key=dev-admin-key",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["items"].as_array().unwrap().len(), 3);
    assert_eq!(orders[0]["total_amount"].as_f64().unwrap(), 588.0);
}

#[tokio::test]
async fn menu_is_served_and_unknown_slug_is_404() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/restaurants/golden-wok/menu", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["restaurant"]["slug"], "golden-wok");
    let items = body["items"].as_array().unwrap();
    assert!(!items.is_empty());
    // Unavailable item 103 is hidden from guests
    assert!(items.iter().all(|i| i["id"] != 103));

    let (status, body) = send(&app, "GET", "/api/restaurants/nowhere/menu", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn session_requires_known_restaurant() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/sessions",
        Some(json!({ "restaurant_slug": "nowhere", "table_id": "1" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn order_with_unknown_session_is_rejected() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "session_id": "00000000-0000-4000-8000-000000000000",
            "table_id": "5",
            "items": [{ "item_id": 401, "quantity": 1 }],
            "payment": { "method": "cash" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn order_with_wrong_table_is_rejected() {
    let app = app();
    let session_id = open_session(&app, "5").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "session_id": session_id,
            "table_id": "7",
            "items": [{ "item_id": 401, "quantity": 1 }],
            "payment": { "method": "cash" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn unknown_item_creates_no_order() {
    let app = app();
    let session_id = open_session(&app, "5").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "session_id": session_id,
            "table_id": "5",
            "items": [{ "item_id": 9999, "quantity": 1 }],
            "payment": { "method": "cash" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");

    let (status, body) = send(&app, "GET", "/api/orders?admin_key=dev-admin-key", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn listing_requires_the_admin_key() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/orders", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "E3001");

    let (status, body) = send(&app, "GET", "/api/orders?admin_key=wrong", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "E3001");
}

#[tokio::test]
async fn list_filter_returns_only_matching_status() {
    let app = app();
    let session_id = open_session(&app, "5").await;

    for _ in 0..2 {
        let (status, _) = send(
            &app,
            "POST",
            "/api/orders",
            Some(json!({
                "session_id": session_id,
                "table_id": "5",
                "items": [{ "item_id": 401, "quantity": 1 }],
                "payment": { "method": "card" }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // Complete order 1 through the admin endpoint
    let (status, _) = send(
        &app,
        "PUT",
        "/api/orders/1/status?admin_key=dev-admin-key",
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "GET",
        "/api/orders?admin_key=dev-admin-key&status=pending",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert!(orders.iter().all(|o| o["status"] == "pending"));
}

#[tokio::test]
async fn append_to_completed_order_conflicts() {
    let app = app();
    let session_id = open_session(&app, "5").await;

    let (_, body) = send(
        &app,
        "POST",
        "/api/orders",
        Some(json!({
            "session_id": session_id,
            "table_id": "5",
            "items": [{ "item_id": 401, "quantity": 1 }],
            "payment": { "method": "cash" }
        })),
    )
    .await;
    let order_id = body["order_id"].as_u64().unwrap();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/orders/{order_id}/status?admin_key=dev-admin-key"),
        Some(json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/orders/{order_id}"),
        Some(json!({ "items": [{ "item_id": 402, "quantity": 1 }] })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E0004");
}
