mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_and_list_categories() {
    let state = common::create_test_state();
    let auth = common::bearer(&state);
    let server = common::api_server(state);

    let response = server
        .post("/api/categories")
        .add_header("Authorization", &auth)
        .json(&json!({ "name": "Field Notes" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created = response.json::<serde_json::Value>();
    assert_eq!(created["name"], "Field Notes");
    assert_eq!(created["slug"], "field-notes");

    server
        .post("/api/categories")
        .add_header("Authorization", &auth)
        .json(&json!({ "name": "Essays" }))
        .await
        .assert_status(StatusCode::CREATED);

    let list = server
        .get("/api/categories")
        .add_header("Authorization", &auth)
        .await
        .json::<serde_json::Value>();

    let names: Vec<&str> = list["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Field Notes", "Essays"]);
}

#[tokio::test]
async fn test_duplicate_category_conflicts() {
    let state = common::create_test_state();
    let auth = common::bearer(&state);
    common::create_category(&state, "Essays").await;
    let server = common::api_server(state);

    let response = server
        .post("/api/categories")
        .add_header("Authorization", &auth)
        .json(&json!({ "name": "essays" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_rename_keeps_slug() {
    let state = common::create_test_state();
    let auth = common::bearer(&state);
    let category = common::create_category(&state, "Notes").await;
    let server = common::api_server(state);

    let response = server
        .patch(&format!("/api/categories/{}", category.id))
        .add_header("Authorization", &auth)
        .json(&json!({ "name": "Short Notes" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "Short Notes");
    assert_eq!(body["slug"], "notes");
}

#[tokio::test]
async fn test_delete_category_with_articles_is_rejected() {
    let state = common::create_test_state();
    let auth = common::bearer(&state);
    let category = common::create_category(&state, "Notes").await;
    common::create_article(&state, "First", "Body", "notes", true).await;
    let server = common::api_server(state);

    server
        .delete(&format!("/api/categories/{}", category.id))
        .add_header("Authorization", &auth)
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_delete_empty_category() {
    let state = common::create_test_state();
    let auth = common::bearer(&state);
    let category = common::create_category(&state, "Notes").await;
    let server = common::api_server(state);

    server
        .delete(&format!("/api/categories/{}", category.id))
        .add_header("Authorization", &auth)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .delete(&format!("/api/categories/{}", category.id))
        .add_header("Authorization", &auth)
        .await
        .assert_status_not_found();
}
