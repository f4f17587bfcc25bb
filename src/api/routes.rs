//! API route configuration.
//!
//! Everything except `POST /session` requires Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    add_image_handler, add_link_handler, article_list_handler, category_list_handler,
    create_article_handler, create_category_handler, delete_article_handler,
    delete_category_handler, delete_image_handler, delete_link_handler, get_article_handler,
    get_bio_handler, login_handler, preview_handler, put_bio_handler, rename_category_handler,
    update_article_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, patch, post},
};

/// Login route, reachable without a token.
///
/// # Endpoints
///
/// - `POST /session` - Exchange the admin passphrase for a session token
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/session", post(login_handler))
}

/// API routes protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /articles`                      - List all articles
/// - `POST   /articles`                      - Create an article
/// - `GET    /articles/{id}`                 - Article with rendered blocks
/// - `PUT    /articles/{id}`                 - Replace editable fields
/// - `DELETE /articles/{id}`                 - Delete an article
/// - `POST   /articles/{id}/images`          - Append an image
/// - `DELETE /articles/{id}/images/{image}`  - Remove an image
/// - `GET    /categories`                    - List categories
/// - `POST   /categories`                    - Create a category
/// - `PATCH  /categories/{id}`               - Rename a category
/// - `DELETE /categories/{id}`               - Delete an empty category
/// - `GET    /bio`                           - Bio with linked paragraphs
/// - `PUT    /bio`                           - Save bio text
/// - `POST   /bio/links`                     - Add a link
/// - `PATCH  /bio/links/{id}`                - Update a link
/// - `DELETE /bio/links/{id}`                - Remove a link
/// - `POST   /preview`                       - Render and linkify arbitrary text
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/articles",
            get(article_list_handler).post(create_article_handler),
        )
        .route(
            "/articles/{id}",
            get(get_article_handler)
                .put(update_article_handler)
                .delete(delete_article_handler),
        )
        .route("/articles/{id}/images", post(add_image_handler))
        .route(
            "/articles/{id}/images/{image_id}",
            delete(delete_image_handler),
        )
        .route(
            "/categories",
            get(category_list_handler).post(create_category_handler),
        )
        .route(
            "/categories/{id}",
            patch(rename_category_handler).delete(delete_category_handler),
        )
        .route("/bio", get(get_bio_handler).put(put_bio_handler))
        .route("/bio/links", post(add_link_handler))
        .route(
            "/bio/links/{id}",
            patch(update_link_handler).delete(delete_link_handler),
        )
        .route("/preview", post(preview_handler))
}
