//! DTOs for article endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::{ArticleInput, ImageInput};
use crate::domain::content::Block;
use crate::domain::entities::{Article, ArticleImage};
use crate::infrastructure::assets::AssetResolver;

/// Request body for `POST /api/articles` and `PUT /api/articles/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct ArticleRequest {
    #[validate(length(min = 1, max = 300))]
    pub title: String,

    #[validate(length(min = 1))]
    pub content: String,

    /// Slug of an existing category.
    #[validate(length(min = 1))]
    pub category: String,

    #[serde(default)]
    pub published: bool,
}

impl From<ArticleRequest> for ArticleInput {
    fn from(req: ArticleRequest) -> Self {
        ArticleInput {
            title: req.title,
            content: req.content,
            category: req.category,
            published: req.published,
        }
    }
}

/// Request body for `POST /api/articles/{id}/images`.
#[derive(Debug, Deserialize, Validate)]
pub struct ImageRequest {
    /// Absolute URL or object key relative to the asset base.
    #[validate(length(min = 1, max = 2048))]
    pub url: String,

    #[serde(default)]
    pub alt: String,

    pub caption: Option<String>,
}

impl From<ImageRequest> for ImageInput {
    fn from(req: ImageRequest) -> Self {
        ImageInput {
            url: req.url,
            alt: req.alt,
            caption: req.caption,
        }
    }
}

/// Article image with its displayable URL.
#[derive(Debug, Serialize)]
pub struct ImageItem {
    pub id: String,
    /// Reference as stored.
    pub url: String,
    /// Resolved URL; empty when the reference uses a disallowed scheme.
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ImageItem {
    pub fn from_image(image: ArticleImage, assets: &AssetResolver) -> Self {
        ImageItem {
            src: assets.resolve(&image.url),
            id: image.id,
            url: image.url,
            alt: image.alt,
            caption: image.caption,
        }
    }
}

/// Full article including its rendered body.
#[derive(Debug, Serialize)]
pub struct ArticleItem {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub published: bool,
    pub content: String,
    pub blocks: Vec<Block>,
    pub images: Vec<ImageItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleItem {
    pub fn from_article(article: Article, assets: &AssetResolver) -> Self {
        ArticleItem {
            blocks: article.blocks(),
            images: article
                .images
                .into_iter()
                .map(|image| ImageItem::from_image(image, assets))
                .collect(),
            id: article.id,
            title: article.title,
            slug: article.slug,
            category: article.category,
            published: article.published,
            content: article.content,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Response containing list of articles.
#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleItem>,
}
