mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_list_tags_empty() {
    let app = common::test_app();

    let response = app.server.get("/api/v1/tags").await;

    response.assert_status_ok();
    assert!(response.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn test_tags_are_shared_and_sorted() {
    let app = common::test_app();

    for tags in [json!(["rust", "web"]), json!(["databases", "rust"])] {
        app.server
            .post("/api/v1/articles")
            .authorization_bearer(app.token_for(1))
            .json(&json!({ "title": "T", "content": "C", "tags": tags }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let names: Vec<String> = app
        .server
        .get("/api/v1/tags")
        .await
        .json::<Vec<Value>>()
        .into_iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(names, vec!["databases", "rust", "web"]);
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let app = common::test_app();

    app.server.get("/api/v1/tags/").await.assert_status_ok();
}
