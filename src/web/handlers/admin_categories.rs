//! Console form posts for categories.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;

use crate::state::AppState;
use crate::web::error::PageError;
use crate::web::handlers::admin::{Tab, back_to};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CategoryForm {
    pub name: String,
}

/// `POST /admin/categories`
pub async fn create_category_handler(
    State(state): State<AppState>,
    Form(form): Form<CategoryForm>,
) -> Result<Redirect, PageError> {
    state.category_service.create(form.name).await?;
    Ok(back_to(Tab::Categories, "Category created"))
}

/// `POST /admin/categories/{id}`
pub async fn rename_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Form(form): Form<CategoryForm>,
) -> Result<Redirect, PageError> {
    state.category_service.rename(id, form.name).await?;
    Ok(back_to(Tab::Categories, "Category renamed"))
}

/// `POST /admin/categories/{id}/delete`
///
/// Categories that still hold articles are refused.
pub async fn delete_category_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Redirect, PageError> {
    state.category_service.delete(id).await?;
    Ok(back_to(Tab::Categories, "Category deleted"))
}
