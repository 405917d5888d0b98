use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use secrecy::Secret;
use serde_json::{json, Value};

use crate::helpers::{spawn_app, spawn_app_with};

fn decode_payload(token: &str) -> Value {
    let payload = token.split('.').nth(1).expect("Token has no payload");
    let bytes = URL_SAFE_NO_PAD.decode(payload).expect("Payload is not base64url");
    serde_json::from_slice(&bytes).expect("Payload is not JSON")
}

#[tokio::test]
async fn correct_password_returns_a_signed_credential() {
    let app = spawn_app().await;

    let response = app
        .post_login(&json!({ "password": app.admin.password }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    let token = body["token"].as_str().unwrap();
    assert_eq!(token.matches('.').count(), 2);
    assert!(token.split('.').all(|segment| !segment.is_empty()));

    let claims = decode_payload(token);
    assert_eq!(claims["principal"], "admin");
    assert!(claims["issuedAtMillis"].as_i64().unwrap() > 1_700_000_000_000);
}

#[tokio::test]
async fn surrounding_whitespace_in_the_password_is_ignored() {
    let app = spawn_app().await;

    let response = app
        .post_login(&json!({ "password": format!("  {}\n", app.admin.password) }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn wrong_password_is_rejected_with_401() {
    let app = spawn_app().await;

    let response = app.post_login(&json!({ "password": "not-the-password" })).await;

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn malformed_login_bodies_are_rejected_with_400() {
    let app = spawn_app().await;
    let test_cases = vec![
        (json!({}), "missing password"),
        (json!({ "password": 12345 }), "numeric password"),
        (json!({ "pass": "secret123" }), "wrong field name"),
    ];

    for (body, description) in test_cases {
        let response = app.post_login(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
    }
}

#[tokio::test]
async fn missing_hmac_secret_is_a_server_error() {
    let app = spawn_app_with(|c| {
        c.authentication.hmac_secret = Secret::new(String::new());
    })
    .await;

    let response = app
        .post_login(&json!({ "password": app.admin.password }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Server configuration is incomplete");
}

#[tokio::test]
async fn missing_admin_password_is_a_server_error() {
    let app = spawn_app_with(|c| {
        c.authentication.admin_password = Secret::new(String::new());
    })
    .await;

    let response = app.post_login(&json!({ "password": "" })).await;

    assert_eq!(response.status().as_u16(), 500);
}

#[tokio::test]
async fn credentials_from_another_deployment_are_rejected() {
    let first = spawn_app().await;
    let second = spawn_app().await;
    let token = first.login().await;

    let response = second
        .get("/api/admin/reviews")
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
}
