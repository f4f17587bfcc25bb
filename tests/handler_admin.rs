mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_console_redirects_without_session() {
    let state = common::create_test_state();
    let server = common::web_server(state);

    let response = server.get("/admin").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/admin/login");
}

#[tokio::test]
async fn test_console_rejects_forged_cookie() {
    let state = common::create_test_state();
    let server = common::web_server(state);

    let response = server
        .get("/admin")
        .add_header("Cookie", "admin_session=1.abc.def")
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_login_page_renders() {
    let state = common::create_test_state();
    let server = common::web_server(state);

    let response = server.get("/admin/login").await;

    response.assert_status_ok();
    assert!(response.text().contains("name=\"passphrase\""));
}

#[tokio::test]
async fn test_login_sets_cookie_and_redirects() {
    let state = common::create_test_state();
    let server = common::web_server(state);

    let response = server
        .post("/admin/login")
        .form(&[("passphrase", common::PASSPHRASE)])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/admin");

    let cookie = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(cookie.starts_with("admin_session="));
    assert!(cookie.contains("HttpOnly"));

    let token_pair = cookie.split(';').next().unwrap().to_string();
    server
        .get("/admin")
        .add_header("Cookie", &token_pair)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_login_wrong_passphrase() {
    let state = common::create_test_state();
    let server = common::web_server(state);

    let response = server
        .post("/admin/login")
        .form(&[("passphrase", "nope")])
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(response.text().contains("Invalid passphrase"));
    assert!(response.headers().get("set-cookie").is_none());
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let state = common::create_test_state();
    let server = common::web_server(state);

    let response = server.post("/admin/logout").await;

    response.assert_status(StatusCode::SEE_OTHER);
    let cookie = response.headers().get("set-cookie").unwrap().to_str().unwrap();
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_console_tabs_render() {
    let state = common::create_test_state();
    let cookie = common::session_cookie(&state);
    let server = common::web_server(state);

    let articles = server.get("/admin").add_header("Cookie", &cookie).await;
    articles.assert_status_ok();
    assert!(articles.text().contains("New article"));

    let categories = server
        .get("/admin?tab=categories")
        .add_header("Cookie", &cookie)
        .await;
    assert!(categories.text().contains("New category"));

    let bio = server
        .get("/admin?tab=bio&edit=")
        .add_header("Cookie", &cookie)
        .await;
    bio.assert_status_ok();
    assert!(bio.text().contains("Save bio"));
}

#[tokio::test]
async fn test_create_category_and_article_from_console() {
    let state = common::create_test_state();
    let cookie = common::session_cookie(&state);
    let server = common::web_server(state.clone());

    let response = server
        .post("/admin/categories")
        .add_header("Cookie", &cookie)
        .form(&[("name", "Field Notes")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        common::location(&response),
        "/admin?tab=categories&notice=Category+created"
    );

    let response = server
        .post("/admin/articles")
        .add_header("Cookie", &cookie)
        .form(&[
            ("title", "First Light"),
            ("content", "Hello\n\n\n\nWorld"),
            ("category", "field-notes"),
        ])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    let article = state.article_service.get_published("first-light").await;
    assert!(article.is_err(), "unchecked box keeps the article a draft");

    let all = state.article_service.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(!all[0].published);
    assert_eq!(
        common::location(&response),
        format!(
            "/admin?tab=articles&edit={}&notice=Article+created",
            all[0].id
        )
    );

    let html = server
        .get(&common::location(&response))
        .add_header("Cookie", &cookie)
        .await
        .text();
    assert!(html.contains("Edit article"));
    assert!(html.contains("Article created"));
    assert!(html.contains("Preview"));
    assert!(html.contains("(empty paragraph)"));
}

#[tokio::test]
async fn test_publish_via_checkbox() {
    let state = common::create_test_state();
    let cookie = common::session_cookie(&state);
    common::create_category(&state, "Notes").await;
    let article = common::create_article(&state, "Draft", "a", "notes", false).await;
    let server = common::web_server(state.clone());

    server
        .post(&format!("/admin/articles/{}", article.id))
        .add_header("Cookie", &cookie)
        .form(&[
            ("title", "Draft"),
            ("content", "a"),
            ("category", "notes"),
            ("published", "on"),
        ])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    assert!(state.article_service.get_published("draft").await.is_ok());
}

#[tokio::test]
async fn test_validation_failure_renders_error_page() {
    let state = common::create_test_state();
    let cookie = common::session_cookie(&state);
    let category = common::create_category(&state, "Notes").await;
    common::create_article(&state, "Keep", "a", "notes", true).await;
    let server = common::web_server(state);

    let response = server
        .post(&format!("/admin/categories/{}/delete", category.id))
        .add_header("Cookie", &cookie)
        .await;

    response.assert_status_bad_request();
    assert!(
        response
            .text()
            .contains("Cannot delete category with existing articles")
    );
}

#[tokio::test]
async fn test_edit_missing_article_is_not_found() {
    let state = common::create_test_state();
    let cookie = common::session_cookie(&state);
    let server = common::web_server(state);

    server
        .get("/admin?edit=42")
        .add_header("Cookie", &cookie)
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_bio_forms() {
    let state = common::create_test_state();
    let cookie = common::session_cookie(&state);
    let server = common::web_server(state.clone());

    server
        .post("/admin/bio")
        .add_header("Cookie", &cookie)
        .form(&[
            ("name", "Ada"),
            ("title", "Engineer"),
            ("paragraph1", "Shipping at Fluid."),
        ])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let response = server
        .post("/admin/bio/links")
        .add_header("Cookie", &cookie)
        .form(&[("name", "Fluid"), ("url", "https://fluid.io")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        common::location(&response),
        "/admin?tab=bio&notice=Link+added"
    );

    let bio = state.bio_service.get().await.unwrap().unwrap();
    assert_eq!(bio.name, "Ada");
    assert_eq!(bio.links.len(), 1);

    let html = server
        .get("/admin?tab=bio")
        .add_header("Cookie", &cookie)
        .await
        .text();
    assert!(html.contains(">Fluid</a>."));

    server
        .post(&format!("/admin/bio/links/{}/delete", bio.links[0].id))
        .add_header("Cookie", &cookie)
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let bio = state.bio_service.get().await.unwrap().unwrap();
    assert!(bio.links.is_empty());
}

#[tokio::test]
async fn test_form_posts_require_session() {
    let state = common::create_test_state();
    let server = common::web_server(state.clone());

    let response = server
        .post("/admin/categories")
        .form(&[("name", "Sneaky")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert!(state.category_service.list().await.unwrap().is_empty());
}
