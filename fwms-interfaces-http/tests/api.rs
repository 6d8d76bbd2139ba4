use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;

use fwms_application::testing::FailingSnapshots;
use fwms_application::AppState;
use fwms_domain::{CafeId, FoodLedger, Role, RuntimeConfig, SnapshotRepository, User, UserId};
use fwms_infrastructure::{JsonSnapshotRepository, MemorySnapshotRepository};
use fwms_interfaces_http::{build_router, DURABILITY_HEADER};

fn user(id: &str, role: Role, organization: &str, cafe: Option<&str>) -> User {
    User {
        id: UserId::new(id),
        role,
        organization: organization.to_string(),
        cafe_id: cafe.map(CafeId::new),
        created_at: Utc::now(),
    }
}

fn app_with(repo: Arc<dyn SnapshotRepository>) -> Router {
    let ledger = FoodLedger::with_users(vec![
        user("admin-1", Role::Admin, "From Plate to Plant", Some("cafe-1")),
        user("staff-1", Role::Staff, "Green Bean Café", Some("cafe-1")),
        user("staff-x", Role::Staff, "Unassigned", None),
        user("admin-x", Role::Admin, "Head Office", None),
        user("charity-1", Role::Charity, "City Food Bank", None),
        user("farmer-1", Role::Farmer, "Sunrise Farm", None),
    ]);
    build_router(AppState::new(RuntimeConfig::default(), ledger, repo))
}

fn app() -> Router {
    app_with(Arc::new(MemorySnapshotRepository))
}

struct Reply {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
    text: String,
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    caller: Option<&str>,
    body: Option<Value>,
) -> Reply {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(caller) = caller {
        builder = builder.header("x-user-id", caller);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let text = String::from_utf8_lossy(&bytes).to_string();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    Reply {
        status,
        headers,
        body,
        text,
    }
}

async fn log_edible(app: &Router) -> String {
    let reply = send(
        app,
        Method::POST,
        "/v1/waste",
        Some("staff-1"),
        Some(json!({
            "category": "edible",
            "item_name": "Croissants",
            "quantity_kg": 15.0,
            "expiry_date": "2026-10-25",
            "assigned_to": "charity"
        })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED, "{}", reply.text);
    reply.body["data"]["id"]
        .as_str()
        .expect("entry id")
        .to_string()
}

async fn marketplace_ids(app: &Router, caller: &str) -> Vec<String> {
    let reply = send(app, Method::GET, "/v1/marketplace", Some(caller), None).await;
    assert_eq!(reply.status, StatusCode::OK, "{}", reply.text);
    reply
        .body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|entry| entry["id"].as_str().map(str::to_string))
        .collect()
}

async fn request_pickup(app: &Router, entry_id: &str) -> String {
    let reply = send(
        app,
        Method::POST,
        "/v1/requests",
        Some("charity-1"),
        Some(json!({ "waste_entry_id": entry_id, "preferred_time": "after 3pm" })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED, "{}", reply.text);
    reply.body["data"]["id"]
        .as_str()
        .expect("request id")
        .to_string()
}

#[tokio::test]
async fn scenario_a_logged_edible_waste_reaches_charity_marketplace() {
    let app = app();
    let entry_id = log_edible(&app).await;

    let reply = send(&app, Method::GET, &format!("/v1/waste/{entry_id}"), Some("staff-1"), None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["assigned_to"], "charity");
    assert_eq!(reply.body["status"], "pending");

    assert_eq!(marketplace_ids(&app, "charity-1").await, vec![entry_id]);
    assert!(marketplace_ids(&app, "farmer-1").await.is_empty());
}

#[tokio::test]
async fn scenarios_b_and_c_approve_schedule_and_complete() {
    let app = app();
    let entry_id = log_edible(&app).await;
    let request_id = request_pickup(&app, &entry_id).await;

    let reply = send(
        &app,
        Method::POST,
        &format!("/v1/requests/{request_id}/approve"),
        Some("admin-1"),
        None,
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK, "{}", reply.text);
    assert_eq!(reply.body["data"]["status"], "approved");

    let reply = send(&app, Method::GET, &format!("/v1/waste/{entry_id}"), Some("admin-1"), None).await;
    assert_eq!(reply.body["status"], "pending");
    assert!(marketplace_ids(&app, "charity-1").await.is_empty());

    let reply = send(
        &app,
        Method::POST,
        "/v1/transportation",
        Some("admin-1"),
        Some(json!({
            "request_id": request_id,
            "scheduled_date": "2026-10-24",
            "time_window": "15:00-17:00",
            "carrier": "GreenFleet"
        })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED, "{}", reply.text);
    let transport_id = reply.body["data"]["id"].as_str().expect("id").to_string();

    let reply = send(
        &app,
        Method::POST,
        &format!("/v1/transportation/{transport_id}/complete"),
        Some("admin-1"),
        None,
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK, "{}", reply.text);
    assert_eq!(reply.body["data"]["transportation"]["status"], "completed");
    assert_eq!(reply.body["data"]["pickup_request"]["status"], "completed");
    assert_eq!(reply.body["data"]["waste_entry"]["status"], "collected");

    let reply = send(&app, Method::GET, "/v1/points", Some("charity-1"), None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["total"], 15.0);
    assert_eq!(reply.body["history"].as_array().map(Vec::len), Some(1));

    let reply = send(&app, Method::GET, "/v1/stats/impact", Some("farmer-1"), None).await;
    assert_eq!(reply.body["collected_kg"], 15.0);
    assert_eq!(reply.body["completed_pickups"], 1);
}

#[tokio::test]
async fn scenario_d_category_mismatch_creates_nothing() {
    let app = app();
    let reply = send(
        &app,
        Method::POST,
        "/v1/waste",
        Some("staff-1"),
        Some(json!({
            "category": "organic",
            "itemName": "Peels",
            "quantity": 4,
            "expiryDate": "2026-10-30",
            "assignedTo": "charity"
        })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert!(reply.body["error"]
        .as_str()
        .expect("error message")
        .contains("category/assignment mismatch"));

    let reply = send(&app, Method::GET, "/v1/waste", Some("staff-1"), None).await;
    assert_eq!(reply.body, json!([]));
}

#[tokio::test]
async fn scenario_e_rejected_entry_returns_to_marketplace() {
    let app = app();
    let entry_id = log_edible(&app).await;
    let request_id = request_pickup(&app, &entry_id).await;
    assert!(marketplace_ids(&app, "charity-1").await.is_empty());

    let reply = send(
        &app,
        Method::POST,
        &format!("/v1/requests/{request_id}/reject"),
        Some("admin-1"),
        None,
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["data"]["status"], "rejected");

    let reply = send(&app, Method::GET, &format!("/v1/waste/{entry_id}"), Some("admin-1"), None).await;
    assert_eq!(reply.body["status"], "pending");
    assert_eq!(marketplace_ids(&app, "charity-1").await, vec![entry_id]);

    let reply = send(
        &app,
        Method::POST,
        &format!("/v1/requests/{request_id}/approve"),
        Some("admin-1"),
        None,
    )
    .await;
    assert_eq!(reply.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn caller_identity_is_enforced() {
    let app = app();
    let reply = send(&app, Method::GET, "/v1/me", None, None).await;
    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
    assert_eq!(reply.body["error"], "unauthorized");

    let reply = send(&app, Method::GET, "/v1/me", Some("ghost"), None).await;
    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);

    let reply = send(&app, Method::GET, "/v1/me", Some("farmer-1"), None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["role"], "farmer");

    let reply = send(
        &app,
        Method::POST,
        "/v1/waste",
        Some("charity-1"),
        Some(json!({ "category": "edible" })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::FORBIDDEN);

    let reply = send(
        &app,
        Method::POST,
        "/v1/waste",
        Some("staff-x"),
        Some(json!({ "category": "edible" })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::FORBIDDEN);
    assert_eq!(reply.body["error"], "no organization assigned");
}

#[tokio::test]
async fn admin_without_cafe_is_refused_everywhere() {
    let app = app();
    let reply = send(
        &app,
        Method::POST,
        "/v1/transportation",
        Some("admin-x"),
        Some(json!({
            "manual": { "destination": "Sunrise Farm", "category": "organic", "quantity_kg": 12 },
            "scheduled_date": "2026-11-03",
            "time_window": "morning",
            "carrier": "Pedal Couriers"
        })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::FORBIDDEN);
    assert_eq!(reply.body["error"], "no organization assigned");

    for uri in [
        "/v1/waste",
        "/v1/transportation",
        "/v1/activity",
        "/v1/points/leaderboard",
        "/v1/ops/metrics",
    ] {
        let reply = send(&app, Method::GET, uri, Some("admin-x"), None).await;
        assert_eq!(reply.status, StatusCode::FORBIDDEN, "{uri}");
        assert_eq!(reply.body["error"], "no organization assigned", "{uri}");
    }

    let reply = send(&app, Method::GET, "/v1/activity", Some("staff-x"), None).await;
    assert_eq!(reply.status, StatusCode::FORBIDDEN);

    let reply = send(&app, Method::GET, "/v1/transportation", Some("admin-1"), None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, json!([]));
}

#[tokio::test]
async fn malformed_input_gets_json_errors() {
    let app = app();
    let reply = send(&app, Method::GET, "/v1/waste/not-a-uuid", Some("staff-1"), None).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert!(reply.body["error"].is_string());

    let reply = send(
        &app,
        Method::POST,
        "/v1/waste",
        Some("staff-1"),
        Some(json!({ "category": "plastic" })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert!(reply.body["error"].is_string());

    let reply = send(
        &app,
        Method::GET,
        "/v1/notifications?limit=lots",
        Some("charity-1"),
        None,
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mutations_report_durability() {
    let app = app();
    let reply = send(
        &app,
        Method::POST,
        "/v1/users",
        Some("admin-1"),
        Some(json!({ "id": "farmer-2", "role": "farmer", "organization": "Hilltop Farm" })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.body["durability"], "memory_only");
    assert_eq!(
        reply.headers.get(DURABILITY_HEADER).and_then(|v| v.to_str().ok()),
        Some("memory_only")
    );

    let dir = std::env::temp_dir().join(format!("fwms-api-{}", uuid::Uuid::new_v4()));
    let persisted = app_with(Arc::new(JsonSnapshotRepository::new(dir.join("fwms.json"))));
    let reply = send(
        &persisted,
        Method::POST,
        "/v1/notifications/read-all",
        Some("charity-1"),
        None,
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["durability"], "persisted");
    assert_eq!(reply.body["data"]["marked"], 0);
    assert!(dir.join("fwms.json").exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn failed_snapshot_degrades_and_fails_readiness() {
    let app = app_with(Arc::new(FailingSnapshots));
    let reply = send(&app, Method::GET, "/v1/ops/health/ready", None, None).await;
    assert_eq!(reply.status, StatusCode::OK);

    let entry_reply = send(
        &app,
        Method::POST,
        "/v1/waste",
        Some("staff-1"),
        Some(json!({
            "category": "coffee",
            "item_name": "Grounds",
            "quantity_kg": 7.5,
            "expiry_date": "2026-11-01",
            "assigned_to": "farmer"
        })),
    )
    .await;
    assert_eq!(entry_reply.status, StatusCode::CREATED);
    assert_eq!(entry_reply.body["durability"], "degraded");
    assert_eq!(
        entry_reply
            .headers
            .get(DURABILITY_HEADER)
            .and_then(|v| v.to_str().ok()),
        Some("degraded")
    );

    let reply = send(&app, Method::GET, "/v1/ops/health/ready", None, None).await;
    assert_eq!(reply.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(reply.body["status"], "degraded");

    let reply = send(&app, Method::GET, "/v1/ops/metrics", Some("admin-1"), None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.text.contains("fwms_persist_failures_total 1"));
    assert!(reply.text.contains("fwms_waste_logged_total 1"));

    let reply = send(&app, Method::GET, "/v1/ops/metrics", Some("staff-1"), None).await;
    assert_eq!(reply.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn transport_patch_and_delete() {
    let app = app();
    let reply = send(
        &app,
        Method::POST,
        "/v1/transportation",
        Some("admin-1"),
        Some(json!({
            "manual": { "destination": "Sunrise Farm", "category": "organic", "quantity_kg": 30 },
            "scheduled_date": "2026-11-02",
            "time_window": "morning",
            "carrier": "Pedal Couriers"
        })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED, "{}", reply.text);
    let id = reply.body["data"]["id"].as_str().expect("id").to_string();
    assert_eq!(reply.body["data"]["source"]["kind"], "manual");

    let reply = send(
        &app,
        Method::PATCH,
        &format!("/v1/transportation/{id}"),
        Some("admin-1"),
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);

    let reply = send(
        &app,
        Method::PATCH,
        &format!("/v1/transportation/{id}"),
        Some("admin-1"),
        Some(json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["data"]["status"], "cancelled");

    let reply = send(
        &app,
        Method::POST,
        &format!("/v1/transportation/{id}/complete"),
        Some("admin-1"),
        None,
    )
    .await;
    assert_eq!(reply.status, StatusCode::CONFLICT);

    let reply = send(
        &app,
        Method::DELETE,
        &format!("/v1/transportation/{id}"),
        Some("admin-1"),
        None,
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);

    let reply = send(&app, Method::GET, &format!("/v1/transportation/{id}"), Some("admin-1"), None).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
}
