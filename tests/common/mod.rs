#![allow(dead_code)]

use axum::{Router, middleware};
use axum_test::TestServer;
use folio::api;
use folio::api::middleware::auth;
use folio::application::services::{ArticleInput, BioInput};
use folio::config::Config;
use folio::domain::entities::{Article, Category};
use folio::state::{AppState, Store};
use folio::web;
use folio::web::error::not_found_handler;
use folio::web::middleware::web_auth;

pub const PASSPHRASE: &str = "open sesame";

pub fn test_config() -> Config {
    Config {
        database_url: None,
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        admin_passphrase: PASSPHRASE.to_string(),
        session_secret: "test-session-secret-0123456789".to_string(),
        session_ttl_seconds: 3600,
        asset_base_url: Some("https://cdn.example.com/media/".to_string()),
        site_name: "Test Journal".to_string(),
        db_max_connections: 5,
        db_connect_timeout: 5,
        db_idle_timeout: 60,
        db_max_lifetime: 600,
        db_connect_retries: 0,
    }
}

/// State backed by fresh in-memory repositories.
pub fn create_test_state() -> AppState {
    AppState::new(Store::Memory, &test_config()).unwrap()
}

/// JSON API under `/api`, authenticated like production but without rate limits.
pub fn api_server(state: AppState) -> TestServer {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let app = Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(protected)
                .merge(api::routes::public_routes()),
        )
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Public site and console, authenticated like production but without rate limits.
pub fn web_server(state: AppState) -> TestServer {
    let protected = web::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        web_auth::layer,
    ));

    let app = Router::new()
        .merge(web::routes::public_routes())
        .nest(
            "/admin",
            Router::new()
                .merge(protected)
                .merge(web::routes::login_routes()),
        )
        .fallback(not_found_handler)
        .with_state(state);

    TestServer::new(app).unwrap()
}

pub fn bearer(state: &AppState) -> String {
    format!("Bearer {}", state.auth_service.issue().token)
}

pub fn session_cookie(state: &AppState) -> String {
    format!("admin_session={}", state.auth_service.issue().token)
}

pub async fn create_category(state: &AppState, name: &str) -> Category {
    state.category_service.create(name.to_string()).await.unwrap()
}

pub async fn create_article(
    state: &AppState,
    title: &str,
    content: &str,
    category: &str,
    published: bool,
) -> Article {
    state
        .article_service
        .create(ArticleInput {
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
            published,
        })
        .await
        .unwrap()
}

pub async fn save_bio(state: &AppState, name: &str, title: &str, paragraph1: &str) {
    state
        .bio_service
        .save(BioInput {
            name: name.to_string(),
            title: title.to_string(),
            paragraph1: paragraph1.to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
}

pub fn location(response: &axum_test::TestResponse) -> String {
    response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
