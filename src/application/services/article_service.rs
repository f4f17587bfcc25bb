//! Article management service.

use crate::domain::entities::{Article, ArticleImage, NewArticle};
use crate::domain::repositories::{ArticleRepository, CategoryRepository};
use crate::error::AppError;
use crate::utils::{generate_id, slugify};
use serde_json::json;
use std::sync::Arc;

/// Editable article fields as submitted by the console or the API.
#[derive(Debug, Clone, Default)]
pub struct ArticleInput {
    pub title: String,
    pub content: String,
    /// Category slug.
    pub category: String,
    pub published: bool,
}

/// A new image reference attached to an article.
#[derive(Debug, Clone, Default)]
pub struct ImageInput {
    pub url: String,
    pub alt: String,
    pub caption: Option<String>,
}

/// Service for creating, editing and listing articles.
///
/// Enforces:
/// - Non-blank title and content
/// - Category must exist
/// - Slug derived from the title once, kept stable across edits
pub struct ArticleService {
    articles: Arc<dyn ArticleRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ArticleService {
    /// Creates a new article service.
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            articles,
            categories,
        }
    }

    /// Lists every article, drafts included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_all(&self) -> Result<Vec<Article>, AppError> {
        self.articles.list().await
    }

    /// Lists the published articles of one category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_published(&self, category: &str) -> Result<Vec<Article>, AppError> {
        self.articles.list_by_category(category, true).await
    }

    /// Retrieves an article by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, id: i64) -> Result<Article, AppError> {
        self.articles
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Article not found", json!({"id": id})))
    }

    /// Retrieves a published article by slug for the public site.
    ///
    /// Drafts are reported as missing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no published article has this slug.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_published(&self, slug: &str) -> Result<Article, AppError> {
        match self.articles.find_by_slug(slug).await? {
            Some(article) if article.published => Ok(article),
            _ => Err(AppError::not_found(
                "Article not found",
                json!({"slug": slug}),
            )),
        }
    }

    /// Creates an article with a slug derived from its title.
    ///
    /// A title with no usable slug characters gets a generated slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is blank or the
    /// category does not exist.
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, input: ArticleInput) -> Result<Article, AppError> {
        let input = self.validate(input).await?;

        let mut slug = slugify(&input.title);
        if slug.is_empty() {
            slug = generate_id();
        }

        if self.articles.find_by_slug(&slug).await?.is_some() {
            return Err(AppError::conflict(
                "An article with this slug already exists",
                json!({"slug": slug}),
            ));
        }

        let created = self
            .articles
            .create(NewArticle {
                title: input.title,
                content: input.content,
                category: input.category,
                slug,
                published: input.published,
                images: Vec::new(),
            })
            .await?;

        metrics::counter!("content_writes_total", "kind" => "article").increment(1);
        tracing::info!(id = created.id, slug = %created.slug, "Article created");
        Ok(created)
    }

    /// Replaces the editable fields of an article.
    ///
    /// The slug, images and creation time are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Validation`] if a required field is blank or the
    /// category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(&self, id: i64, input: ArticleInput) -> Result<Article, AppError> {
        let current = self.get(id).await?;
        let input = self.validate(input).await?;

        let mut update = current.to_update();
        update.title = input.title;
        update.content = input.content;
        update.category = input.category;
        update.published = input.published;

        let updated = self.articles.update(id, update).await?;
        metrics::counter!("content_writes_total", "kind" => "article").increment(1);
        Ok(updated)
    }

    /// Publishes or unpublishes an article without touching its content.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn set_published(&self, id: i64, published: bool) -> Result<Article, AppError> {
        let current = self.get(id).await?;
        if current.published == published {
            return Ok(current);
        }

        let mut update = current.to_update();
        update.published = published;
        self.articles.update(id, update).await
    }

    /// Deletes an article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.articles.delete(id).await?;
        tracing::info!(id, "Article deleted");
        Ok(())
    }

    /// Appends an image reference to an article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is blank.
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_image(&self, id: i64, input: ImageInput) -> Result<Article, AppError> {
        let url = input.url.trim();
        if url.is_empty() {
            return Err(AppError::bad_request(
                "Image URL is required",
                json!({"field": "url"}),
            ));
        }

        let current = self.get(id).await?;
        let mut update = current.to_update();
        update.images.push(ArticleImage {
            id: generate_id(),
            url: url.to_string(),
            alt: input.alt.trim().to_string(),
            caption: input
                .caption
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
        });

        self.articles.update(id, update).await
    }

    /// Removes an image reference from an article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article or the image does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn remove_image(&self, id: i64, image_id: &str) -> Result<Article, AppError> {
        let current = self.get(id).await?;
        let mut update = current.to_update();

        let before = update.images.len();
        update.images.retain(|image| image.id != image_id);
        if update.images.len() == before {
            return Err(AppError::not_found(
                "Image not found",
                json!({"article_id": id, "image_id": image_id}),
            ));
        }

        self.articles.update(id, update).await
    }

    /// Trims the input and checks required fields and the category.
    async fn validate(&self, input: ArticleInput) -> Result<ArticleInput, AppError> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::bad_request(
                "Title is required",
                json!({"field": "title"}),
            ));
        }

        if input.content.trim().is_empty() {
            return Err(AppError::bad_request(
                "Content is required",
                json!({"field": "content"}),
            ));
        }

        let category = input.category.trim().to_string();
        if category.is_empty() {
            return Err(AppError::bad_request(
                "Category is required",
                json!({"field": "category"}),
            ));
        }
        if self.categories.find_by_slug(&category).await?.is_none() {
            return Err(AppError::bad_request(
                "Unknown category",
                json!({"category": category}),
            ));
        }

        Ok(ArticleInput {
            title,
            content: input.content,
            category,
            published: input.published,
        })
    }
}
