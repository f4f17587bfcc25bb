//! Console form posts for articles and their images.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;

use crate::application::services::{ArticleInput, ImageInput};
use crate::state::AppState;
use crate::web::error::PageError;
use crate::web::handlers::admin::{Tab, back_to, back_to_article};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ArticleForm {
    pub title: String,
    pub content: String,
    pub category: String,
    /// Checkbox; present only when ticked.
    pub published: Option<String>,
}

impl From<ArticleForm> for ArticleInput {
    fn from(form: ArticleForm) -> Self {
        ArticleInput {
            title: form.title,
            content: form.content,
            category: form.category,
            published: form.published.is_some(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ImageForm {
    pub url: String,
    pub alt: String,
    pub caption: String,
}

impl From<ImageForm> for ImageInput {
    fn from(form: ImageForm) -> Self {
        ImageInput {
            url: form.url,
            alt: form.alt,
            caption: Some(form.caption),
        }
    }
}

/// `POST /admin/articles`
pub async fn create_article_handler(
    State(state): State<AppState>,
    Form(form): Form<ArticleForm>,
) -> Result<Redirect, PageError> {
    let article = state.article_service.create(form.into()).await?;
    tracing::info!(id = article.id, slug = %article.slug, "Article created from console");
    Ok(back_to_article(article.id, "Article created"))
}

/// `POST /admin/articles/{id}`
pub async fn update_article_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Form(form): Form<ArticleForm>,
) -> Result<Redirect, PageError> {
    state.article_service.update(id, form.into()).await?;
    Ok(back_to_article(id, "Article saved"))
}

/// `POST /admin/articles/{id}/delete`
pub async fn delete_article_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Redirect, PageError> {
    state.article_service.delete(id).await?;
    Ok(back_to(Tab::Articles, "Article deleted"))
}

/// `POST /admin/articles/{id}/images`
pub async fn add_image_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Form(form): Form<ImageForm>,
) -> Result<Redirect, PageError> {
    state.article_service.add_image(id, form.into()).await?;
    Ok(back_to_article(id, "Image added"))
}

/// `POST /admin/articles/{id}/images/{image_id}/delete`
pub async fn delete_image_handler(
    Path((id, image_id)): Path<(i64, String)>,
    State(state): State<AppState>,
) -> Result<Redirect, PageError> {
    state.article_service.remove_image(id, &image_id).await?;
    Ok(back_to_article(id, "Image removed"))
}
