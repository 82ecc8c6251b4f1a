mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_change_log_level() {
    let app = common::test_app();

    let response = app
        .server
        .put("/api/v1/admin/log-level")
        .authorization_bearer(app.admin_token())
        .json(&json!({ "level": "debug" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "log level changed to debug"
    );
}

#[tokio::test]
async fn test_change_log_level_invalid() {
    let app = common::test_app();

    let response = app
        .server
        .put("/api/v1/admin/log-level")
        .authorization_bearer(app.admin_token())
        .json(&json!({ "level": "blog_backend=loud" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["code"], 10002);
}

#[tokio::test]
async fn test_change_log_level_requires_token() {
    let app = common::test_app();

    app.server
        .put("/api/v1/admin/log-level")
        .json(&json!({ "level": "debug" }))
        .await
        .assert_status_unauthorized();
}

#[tokio::test]
async fn test_change_log_level_rejects_registered_user() {
    let app = common::test_app();

    app.server
        .post("/api/v1/register")
        .json(&json!({
            "username": "mallory",
            "password": "secret123",
            "email": "mallory@example.com"
        }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let token = app
        .server
        .post("/api/v1/login")
        .json(&json!({ "username": "mallory", "password": "secret123" }))
        .await
        .json::<Value>()["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .server
        .put("/api/v1/admin/log-level")
        .authorization_bearer(&token)
        .json(&json!({ "level": "off" }))
        .await;

    response.assert_status_unauthorized();
    assert_eq!(response.json::<Value>()["code"], 10003);
}
