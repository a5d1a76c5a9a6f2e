//! Router-level behavior: health probe, fallback, body parsing, CORS.

use serde_json::json;

mod common;

use common::{contact, create_contact, spawn_app};

#[tokio::test]
async fn health_probe_reports_ok() {
    let app = spawn_app().await;

    let res = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unmatched_route_gets_envelope_404() {
    let app = spawn_app().await;

    let res = app
        .client
        .get(app.url("/api/no-such-thing"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    let envelope: serde_json::Value = res.json().await.unwrap();
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["message"], "route not found");
}

#[tokio::test]
async fn non_numeric_id_is_a_validation_failure() {
    let app = spawn_app().await;

    let res = app
        .client
        .get(app.url("/api/contacts/abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let envelope: serde_json::Value = res.json().await.unwrap();
    assert_eq!(envelope["success"], false);
}

#[tokio::test]
async fn malformed_json_body_is_a_validation_failure() {
    let app = spawn_app().await;

    let res = app
        .client
        .post(app.url("/api/contacts"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let envelope: serde_json::Value = res.json().await.unwrap();
    assert_eq!(envelope["success"], false);
}

#[tokio::test]
async fn urlencoded_bodies_are_accepted() {
    let app = spawn_app().await;

    let res = app
        .client
        .post(app.url("/api/contacts"))
        .form(&[("name", "Alice"), ("phone", "13800001111")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);

    let envelope: serde_json::Value = res.json().await.unwrap();
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["data"]["name"], "Alice");
}

#[tokio::test]
async fn any_origin_is_allowed() {
    let app = spawn_app().await;

    let res = app
        .client
        .get(app.url("/api/contacts"))
        .header("origin", "http://elsewhere.example")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = spawn_app().await;

    let res = app.client.get(app.url("/api/contacts")).send().await.unwrap();
    assert!(res.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn client_assets_are_served() {
    let app = spawn_app().await;

    let res = app.client.get(app.url("/")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let body = res.text().await.unwrap();
    assert!(body.contains("contact-form"));

    let res = app.client.get(app.url("/app.js")).send().await.unwrap();
    assert_eq!(res.status(), 200);

    let res = app.client.get(app.url("/style.css")).send().await.unwrap();
    assert_eq!(res.status(), 200);
}

#[tokio::test]
async fn create_and_update_share_validation_rules() {
    let app = spawn_app().await;

    let envelope = create_contact(&app, &contact("Alice", "13800001111")).await;
    let id = envelope["data"]["id"].as_i64().unwrap();

    let res = app
        .client
        .put(app.url(&format!("/api/contacts/{}", id)))
        .json(&json!({ "name": "Alice", "phone": "12345" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let envelope: serde_json::Value = res.json().await.unwrap();
    assert_eq!(envelope["message"], "invalid phone number format");
}
