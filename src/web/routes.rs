//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    add_image_handler, add_link_handler, admin_handler, article_handler, create_article_handler,
    create_category_handler, delete_article_handler, delete_category_handler,
    delete_image_handler, delete_link_handler, home_handler, login_page_handler,
    login_submit_handler, logout_handler, rename_category_handler, save_bio_handler,
    update_article_handler, update_link_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Public site pages.
///
/// # Endpoints
///
/// - `GET /` - Bio header and published articles grouped by category
/// - `GET /article/{slug}` - One published article
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/article/{slug}", get(article_handler))
}

/// Console login and logout, mounted under `/admin`.
///
/// # Endpoints
///
/// - `GET /login` - Passphrase form
/// - `POST /login` - Start a session
/// - `POST /logout` - End the session
pub fn login_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page_handler).post(login_submit_handler))
        .route("/logout", post(logout_handler))
}

/// Console routes, mounted under `/admin`.
///
/// Protected via [`crate::web::middleware::web_auth`]. Every form post
/// redirects back to the console with a notice.
///
/// # Endpoints
///
/// - `GET /` - Console with articles, categories and bio tabs
/// - `POST /articles` - Create article
/// - `POST /articles/{id}` - Save article
/// - `POST /articles/{id}/delete` - Delete article
/// - `POST /articles/{id}/images` - Attach image
/// - `POST /articles/{id}/images/{image_id}/delete` - Remove image
/// - `POST /categories` - Create category
/// - `POST /categories/{id}` - Rename category
/// - `POST /categories/{id}/delete` - Delete empty category
/// - `POST /bio` - Save bio text
/// - `POST /bio/links` - Add link
/// - `POST /bio/links/{id}` - Save link
/// - `POST /bio/links/{id}/delete` - Remove link
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin_handler))
        .route("/articles", post(create_article_handler))
        .route("/articles/{id}", post(update_article_handler))
        .route("/articles/{id}/delete", post(delete_article_handler))
        .route("/articles/{id}/images", post(add_image_handler))
        .route(
            "/articles/{id}/images/{image_id}/delete",
            post(delete_image_handler),
        )
        .route("/categories", post(create_category_handler))
        .route("/categories/{id}", post(rename_category_handler))
        .route("/categories/{id}/delete", post(delete_category_handler))
        .route("/bio", post(save_bio_handler))
        .route("/bio/links", post(add_link_handler))
        .route("/bio/links/{id}", post(update_link_handler))
        .route("/bio/links/{id}/delete", post(delete_link_handler))
}
