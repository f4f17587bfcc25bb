mod common;

#[tokio::test]
async fn test_home_without_content() {
    let state = common::create_test_state();
    let server = common::web_server(state);

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("No categories available yet..."));
    assert!(!html.contains("class=\"bio\""));
}

#[tokio::test]
async fn test_home_lists_published_articles_by_category() {
    let state = common::create_test_state();
    common::create_category(&state, "Essays").await;
    common::create_category(&state, "Empty Shelf").await;
    common::create_article(&state, "Visible Piece", "a", "essays", true).await;
    common::create_article(&state, "Secret Draft", "b", "essays", false).await;
    let server = common::web_server(state);

    let html = server.get("/").await.text();

    assert!(html.contains("Essays"));
    assert!(html.contains("Visible Piece"));
    assert!(html.contains("article/visible-piece"));
    assert!(!html.contains("Secret Draft"));
    assert!(html.contains("Empty Shelf"));
    assert!(html.contains("No articles in this category yet..."));
}

#[tokio::test]
async fn test_home_bio_header_and_linked_paragraph() {
    let state = common::create_test_state();
    common::save_bio(&state, "Ada", "Builder at Meteora", "I like Meteora a lot.").await;
    state
        .bio_service
        .add_link("Meteora".to_string(), "https://meteora.ag".to_string())
        .await
        .unwrap();
    let server = common::web_server(state);

    let html = server.get("/").await.text();

    assert!(html.contains("Ada"));
    assert!(html.contains(">Builder at Meteora</a>."));
    assert!(html.contains("I like <a href="));
    assert!(html.contains("meteora.ag"));
    assert!(html.contains(">Meteora</a> a lot."));
}

#[tokio::test]
async fn test_home_bio_title_unlinked_without_links() {
    let state = common::create_test_state();
    common::save_bio(&state, "Ada", "Builder", "").await;
    let server = common::web_server(state);

    let html = server.get("/").await.text();

    assert!(html.contains("Builder."));
    assert!(!html.contains(">Builder</a>"));
}

#[tokio::test]
async fn test_article_page_renders_body() {
    let state = common::create_test_state();
    common::create_category(&state, "Essays").await;
    common::create_article(
        &state,
        "On Tools",
        "**Why**\n\nBecause.\n\n   \n\n• fast\n• small",
        "essays",
        true,
    )
    .await;
    let server = common::web_server(state);

    let response = server.get("/article/on-tools").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<h1>On Tools</h1>"));
    assert!(html.contains("<h2>Why</h2>"));
    assert!(html.contains("Because."));
    assert!(html.contains("<span>fast</span>"));
    assert!(html.contains("<span>small</span>"));
    assert!(!html.contains("(empty paragraph)"));
    assert!(html.contains("Test Journal"));
}

#[tokio::test]
async fn test_article_page_shows_resolved_images() {
    let state = common::create_test_state();
    common::create_category(&state, "Essays").await;
    let article = common::create_article(&state, "Gallery", "Body", "essays", true).await;
    state
        .article_service
        .add_image(
            article.id,
            folio::application::services::ImageInput {
                url: "shots/one.jpg".to_string(),
                alt: "First shot".to_string(),
                caption: Some("Morning light".to_string()),
            },
        )
        .await
        .unwrap();
    let server = common::web_server(state);

    let html = server.get("/article/gallery").await.text();

    assert!(html.contains("cdn.example.com"));
    assert!(html.contains("shots"));
    assert!(html.contains("First shot"));
    assert!(html.contains("<figcaption>Morning light</figcaption>"));
}

#[tokio::test]
async fn test_draft_article_is_not_found() {
    let state = common::create_test_state();
    common::create_category(&state, "Essays").await;
    common::create_article(&state, "Hidden", "a", "essays", false).await;
    let server = common::web_server(state);

    let response = server.get("/article/hidden").await;

    response.assert_status_not_found();
    assert!(response.text().contains("Not found"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let state = common::create_test_state();
    let server = common::web_server(state);

    server.get("/no/such/page").await.assert_status_not_found();
    server.get("/article/missing").await.assert_status_not_found();
}
