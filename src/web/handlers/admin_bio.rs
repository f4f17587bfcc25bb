//! Console form posts for the bio and its links.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;

use crate::application::services::BioInput;
use crate::state::AppState;
use crate::web::error::PageError;
use crate::web::handlers::admin::{Tab, back_to};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BioForm {
    pub name: String,
    pub title: String,
    pub company: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub paragraph3: String,
}

impl From<BioForm> for BioInput {
    fn from(form: BioForm) -> Self {
        BioInput {
            name: form.name,
            title: form.title,
            company: form.company,
            paragraph1: form.paragraph1,
            paragraph2: form.paragraph2,
            paragraph3: form.paragraph3,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LinkForm {
    pub name: String,
    pub url: String,
}

/// `POST /admin/bio`
pub async fn save_bio_handler(
    State(state): State<AppState>,
    Form(form): Form<BioForm>,
) -> Result<Redirect, PageError> {
    state.bio_service.save(form.into()).await?;
    Ok(back_to(Tab::Bio, "Bio saved"))
}

/// `POST /admin/bio/links`
pub async fn add_link_handler(
    State(state): State<AppState>,
    Form(form): Form<LinkForm>,
) -> Result<Redirect, PageError> {
    state.bio_service.add_link(form.name, form.url).await?;
    Ok(back_to(Tab::Bio, "Link added"))
}

/// `POST /admin/bio/links/{id}`
pub async fn update_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Form(form): Form<LinkForm>,
) -> Result<Redirect, PageError> {
    state
        .bio_service
        .update_link(&id, form.name, form.url)
        .await?;
    Ok(back_to(Tab::Bio, "Link saved"))
}

/// `POST /admin/bio/links/{id}/delete`
pub async fn delete_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, PageError> {
    state.bio_service.remove_link(&id).await?;
    Ok(back_to(Tab::Bio, "Link removed"))
}
