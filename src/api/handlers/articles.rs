//! Handlers for article management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::article::{ArticleItem, ArticleListResponse, ArticleRequest, ImageRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every article, drafts included.
///
/// # Endpoint
///
/// `GET /api/articles`
pub async fn article_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ArticleListResponse>, AppError> {
    let articles = state.article_service.list_all().await?;

    Ok(Json(ArticleListResponse {
        items: articles
            .into_iter()
            .map(|a| ArticleItem::from_article(a, &state.assets))
            .collect(),
    }))
}

/// Returns one article with its rendered blocks.
///
/// # Endpoint
///
/// `GET /api/articles/{id}`
///
/// # Errors
///
/// Returns 404 if the article does not exist.
pub async fn get_article_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ArticleItem>, AppError> {
    let article = state.article_service.get(id).await?;
    Ok(Json(ArticleItem::from_article(article, &state.assets)))
}

/// Creates an article.
///
/// # Endpoint
///
/// `POST /api/articles`
///
/// # Errors
///
/// Returns 400 if a required field is blank or the category is unknown.
/// Returns 409 if an article with the derived slug exists.
pub async fn create_article_handler(
    State(state): State<AppState>,
    Json(payload): Json<ArticleRequest>,
) -> Result<(StatusCode, Json<ArticleItem>), AppError> {
    payload.validate()?;

    let article = state.article_service.create(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ArticleItem::from_article(article, &state.assets)),
    ))
}

/// Replaces the editable fields of an article. The slug never changes.
///
/// # Endpoint
///
/// `PUT /api/articles/{id}`
///
/// # Errors
///
/// Returns 400 if a required field is blank or the category is unknown.
/// Returns 404 if the article does not exist.
pub async fn update_article_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ArticleRequest>,
) -> Result<Json<ArticleItem>, AppError> {
    payload.validate()?;

    let article = state.article_service.update(id, payload.into()).await?;

    Ok(Json(ArticleItem::from_article(article, &state.assets)))
}

/// Deletes an article.
///
/// # Endpoint
///
/// `DELETE /api/articles/{id}`
///
/// # Errors
///
/// Returns 404 if the article does not exist.
pub async fn delete_article_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.article_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Appends an image reference to an article.
///
/// # Endpoint
///
/// `POST /api/articles/{id}/images`
///
/// # Errors
///
/// Returns 400 if the URL is blank.
/// Returns 404 if the article does not exist.
pub async fn add_image_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ImageRequest>,
) -> Result<(StatusCode, Json<ArticleItem>), AppError> {
    payload.validate()?;

    let article = state.article_service.add_image(id, payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ArticleItem::from_article(article, &state.assets)),
    ))
}

/// Removes an image reference from an article.
///
/// # Endpoint
///
/// `DELETE /api/articles/{id}/images/{image_id}`
///
/// # Errors
///
/// Returns 404 if the article or image does not exist.
pub async fn delete_image_handler(
    Path((id, image_id)): Path<(i64, String)>,
    State(state): State<AppState>,
) -> Result<Json<ArticleItem>, AppError> {
    let article = state.article_service.remove_image(id, &image_id).await?;
    Ok(Json(ArticleItem::from_article(article, &state.assets)))
}
