//! Handler for the content preview endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::preview::{PreviewRequest, PreviewResponse};
use crate::domain::content::{linkify, render};
use crate::error::AppError;
use crate::state::AppState;

/// Renders arbitrary text the way article bodies and bio paragraphs are shown.
///
/// # Endpoint
///
/// `POST /api/preview`
///
/// # Request
///
/// ```json
/// { "text": "**Intro**\n\nWorking at Jupiter", "entities": [{"name": "Jupiter", "url": "https://jup.ag"}] }
/// ```
///
/// `blocks` is always returned. `spans` is present when `entities` is
/// non-empty or `use_bio_links` is set; explicit entities come before bio links.
pub async fn preview_handler(
    State(state): State<AppState>,
    Json(payload): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    payload.validate()?;

    let mut entities = payload.entities;
    if payload.use_bio_links
        && let Some(bio) = state.bio_service.get().await?
    {
        entities.extend(bio.link_entities());
    }

    let spans = (payload.use_bio_links || !entities.is_empty())
        .then(|| linkify(&payload.text, &entities));

    Ok(Json(PreviewResponse {
        blocks: render(&payload.text),
        spans,
    }))
}
