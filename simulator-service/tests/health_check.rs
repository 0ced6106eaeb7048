//! Health state machine integration tests.

mod common;

use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn healthz_returns_ok_while_healthy() {
    let app = TestApp::spawn().await;
    let client = app.client();

    let response = client
        .get(format!("{}/healthz", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn bad_health_degrades_every_subsequent_probe() {
    let app = TestApp::spawn().await;
    let client = app.client();

    // Healthy until degraded
    let response = client
        .get(format!("{}/healthz", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/bad-health", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "status": "App health set to 'false'" }));

    // The flag never reverts within the process lifetime
    for _ in 0..3 {
        let response = client
            .get(format!("{}/healthz", app.address))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), 500);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body, json!({ "error": "Application unhealthy" }));
    }
}

#[tokio::test]
async fn bad_health_is_idempotent() {
    let app = TestApp::spawn().await;
    let client = app.client();

    for _ in 0..2 {
        let response = client
            .get(format!("{}/bad-health", app.address))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body, json!({ "status": "App health set to 'false'" }));
    }

    let response = client
        .get(format!("{}/healthz", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 500);
}
