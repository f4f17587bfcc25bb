//! Handlers for category management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::category::{CategoryItem, CategoryListResponse, CategoryRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all categories in creation order.
///
/// # Endpoint
///
/// `GET /api/categories`
pub async fn category_list_handler(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, AppError> {
    let categories = state.category_service.list().await?;

    Ok(Json(CategoryListResponse {
        items: categories.into_iter().map(CategoryItem::from).collect(),
    }))
}

/// Creates a category.
///
/// # Endpoint
///
/// `POST /api/categories`
///
/// # Errors
///
/// Returns 400 if the name is blank.
/// Returns 409 if a category with the derived slug exists.
pub async fn create_category_handler(
    State(state): State<AppState>,
    Json(payload): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryItem>), AppError> {
    payload.validate()?;

    let category = state.category_service.create(payload.name).await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// Renames a category. The slug is kept.
///
/// # Endpoint
///
/// `PATCH /api/categories/{id}`
///
/// # Errors
///
/// Returns 400 if the name is blank.
/// Returns 404 if the category does not exist.
pub async fn rename_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<CategoryItem>, AppError> {
    payload.validate()?;

    let category = state.category_service.rename(id, payload.name).await?;

    Ok(Json(category.into()))
}

/// Deletes an empty category.
///
/// # Endpoint
///
/// `DELETE /api/categories/{id}`
///
/// # Errors
///
/// Returns 400 if articles are still filed under the category.
/// Returns 404 if the category does not exist.
pub async fn delete_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.category_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
