//! DTOs for the content preview endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::content::{Block, LinkEntity, Span};

/// Request body for `POST /api/preview`.
#[derive(Debug, Deserialize, Validate)]
pub struct PreviewRequest {
    #[validate(length(max = 200000))]
    pub text: String,

    /// Entities to link inside `text`.
    #[serde(default)]
    pub entities: Vec<LinkEntity>,

    /// Also link the names of the saved bio links.
    #[serde(default)]
    pub use_bio_links: bool,
}

/// Rendered blocks, plus linked spans when any entities were supplied.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spans: Option<Vec<Span>>,
}
