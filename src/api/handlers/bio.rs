//! Handlers for the bio and its links.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::bio::{BioRequest, BioResponse, LinkRequest, UpdateLinkRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the bio with linkified paragraphs.
///
/// # Endpoint
///
/// `GET /api/bio`
///
/// # Errors
///
/// Returns 404 if no bio has been saved yet.
pub async fn get_bio_handler(State(state): State<AppState>) -> Result<Json<BioResponse>, AppError> {
    let bio = state
        .bio_service
        .get()
        .await?
        .ok_or_else(|| AppError::not_found("Bio not found", json!({})))?;

    Ok(Json(bio.into()))
}

/// Creates or replaces the bio text. Links are kept.
///
/// # Endpoint
///
/// `PUT /api/bio`
pub async fn put_bio_handler(
    State(state): State<AppState>,
    Json(payload): Json<BioRequest>,
) -> Result<Json<BioResponse>, AppError> {
    payload.validate()?;

    let bio = state.bio_service.save(payload.into()).await?;

    Ok(Json(bio.into()))
}

/// Appends a named link.
///
/// # Endpoint
///
/// `POST /api/bio/links`
///
/// # Errors
///
/// Returns 400 if the name is blank or the URL is not absolute HTTP(S) or mailto.
pub async fn add_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<LinkRequest>,
) -> Result<(StatusCode, Json<BioResponse>), AppError> {
    payload.validate()?;

    let bio = state
        .bio_service
        .add_link(payload.name, payload.url)
        .await?;

    Ok((StatusCode::CREATED, Json(bio.into())))
}

/// Partially updates a link.
///
/// # Endpoint
///
/// `PATCH /api/bio/links/{id}`
///
/// # Errors
///
/// Returns 400 if a provided field is invalid.
/// Returns 404 if the link does not exist.
pub async fn update_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<BioResponse>, AppError> {
    payload.validate()?;

    let current = state
        .bio_service
        .get()
        .await?
        .and_then(|bio| bio.links.into_iter().find(|link| link.id == id))
        .ok_or_else(|| AppError::not_found("Link not found", json!({"id": id})))?;

    let bio = state
        .bio_service
        .update_link(
            &id,
            payload.name.unwrap_or(current.name),
            payload.url.unwrap_or(current.url),
        )
        .await?;

    Ok(Json(bio.into()))
}

/// Removes a link.
///
/// # Endpoint
///
/// `DELETE /api/bio/links/{id}`
///
/// # Errors
///
/// Returns 404 if the link does not exist.
pub async fn delete_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.bio_service.remove_link(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
