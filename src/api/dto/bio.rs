//! DTOs for the bio and its links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::BioInput;
use crate::domain::content::Span;
use crate::domain::entities::{Bio, BioLink};

/// Request body for `PUT /api/bio`. Omitted text fields are saved empty.
#[derive(Debug, Deserialize, Validate)]
pub struct BioRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub paragraph1: String,
    #[serde(default)]
    pub paragraph2: String,
    #[serde(default)]
    pub paragraph3: String,
}

impl From<BioRequest> for BioInput {
    fn from(req: BioRequest) -> Self {
        BioInput {
            name: req.name,
            title: req.title,
            company: req.company,
            paragraph1: req.paragraph1,
            paragraph2: req.paragraph2,
            paragraph3: req.paragraph3,
        }
    }
}

/// Request body for `POST /api/bio/links`.
#[derive(Debug, Deserialize, Validate)]
pub struct LinkRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Request body for `PATCH /api/bio/links/{id}`.
///
/// All fields are optional; only provided fields are changed.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub url: Option<String>,
}

/// The bio with each non-empty paragraph split into linked spans.
#[derive(Debug, Serialize)]
pub struct BioResponse {
    pub name: String,
    pub title: String,
    pub company: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub paragraph3: String,
    pub links: Vec<BioLink>,
    pub paragraphs: Vec<Vec<Span>>,
    pub updated_at: DateTime<Utc>,
}

impl From<Bio> for BioResponse {
    fn from(bio: Bio) -> Self {
        BioResponse {
            paragraphs: bio.linked_paragraphs(),
            name: bio.name,
            title: bio.title,
            company: bio.company,
            paragraph1: bio.paragraph1,
            paragraph2: bio.paragraph2,
            paragraph3: bio.paragraph3,
            links: bio.links,
            updated_at: bio.updated_at,
        }
    }
}
