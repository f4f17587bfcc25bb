//! Article entity and its attached images.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::content::{Block, render};

/// A published or draft article.
///
/// `category` holds the slug of the owning [`super::Category`]. The article
/// `slug` is derived from the title at creation and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub slug: String,
    pub published: bool,
    pub images: Vec<ArticleImage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Renders the body into display blocks.
    pub fn blocks(&self) -> Vec<Block> {
        render(&self.content)
    }

    /// Returns the editable fields as an update, for read-modify-write changes.
    pub fn to_update(&self) -> ArticleUpdate {
        ArticleUpdate {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
            published: self.published,
            images: self.images.clone(),
        }
    }
}

/// An image attached to an article.
///
/// Stored inline with the article. `url` is either an absolute URL or an
/// object key resolved by [`crate::infrastructure::assets::AssetResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleImage {
    pub id: String,
    pub url: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Input data for creating a new article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub category: String,
    pub slug: String,
    pub published: bool,
    pub images: Vec<ArticleImage>,
}

/// Replacement values for an article's editable fields.
///
/// The slug and creation timestamp are not editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleUpdate {
    pub title: String,
    pub content: String,
    pub category: String,
    pub published: bool,
    pub images: Vec<ArticleImage>,
}
