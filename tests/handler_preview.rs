mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_preview_renders_blocks_without_spans() {
    let state = common::create_test_state();
    let auth = common::bearer(&state);
    let server = common::api_server(state);

    let body = server
        .post("/api/preview")
        .add_header("Authorization", &auth)
        .json(&json!({ "text": "**Title**\n\nA\n• one\n• two\nB" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(body["blocks"][0]["kind"], "heading");
    assert_eq!(body["blocks"][0]["text"], "Title");
    let lines = body["blocks"][1]["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["kind"], "plain");
    assert_eq!(lines[1]["kind"], "bullet");
    assert_eq!(lines[1]["text"], "one");
    assert!(body.get("spans").is_none());
}

#[tokio::test]
async fn test_preview_links_explicit_entities() {
    let state = common::create_test_state();
    let auth = common::bearer(&state);
    let server = common::api_server(state);

    let body = server
        .post("/api/preview")
        .add_header("Authorization", &auth)
        .json(&json!({
            "text": "Jup and Jupiter",
            "entities": [
                { "name": "Jup", "url": "u1" },
                { "name": "Jupiter", "url": "u2" }
            ]
        }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(
        body["spans"],
        json!([
            { "kind": "link", "text": "Jup", "url": "u1" },
            { "kind": "plain", "text": " and " },
            { "kind": "link", "text": "Jupiter", "url": "u2" }
        ])
    );
}

#[tokio::test]
async fn test_preview_with_bio_links() {
    let state = common::create_test_state();
    let auth = common::bearer(&state);
    state
        .bio_service
        .add_link("Kyber".to_string(), "https://kyber.network".to_string())
        .await
        .unwrap();
    let server = common::api_server(state);

    let body = server
        .post("/api/preview")
        .add_header("Authorization", &auth)
        .json(&json!({ "text": "superKyber and kyber", "use_bio_links": true }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(
        body["spans"],
        json!([
            { "kind": "plain", "text": "superKyber and " },
            { "kind": "link", "text": "Kyber", "url": "https://kyber.network" }
        ])
    );
}

#[tokio::test]
async fn test_preview_requires_auth() {
    let state = common::create_test_state();
    let server = common::api_server(state);

    server
        .post("/api/preview")
        .json(&json!({ "text": "x" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
