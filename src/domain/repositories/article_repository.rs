//! Repository trait for article data access.

use crate::domain::entities::{Article, ArticleUpdate, NewArticle};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing articles.
///
/// Listings are returned in creation order.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgArticleRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryArticleRepository`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Creates a new article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_article: NewArticle) -> Result<Article, AppError>;

    /// Finds an article by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError>;

    /// Finds an article by its slug, published or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, AppError>;

    /// Lists every article, drafts included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Article>, AppError>;

    /// Lists the articles filed under a category slug.
    ///
    /// # Arguments
    ///
    /// - `category` - Category slug
    /// - `only_published` - If true, drafts are excluded
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_category(
        &self,
        category: &str,
        only_published: bool,
    ) -> Result<Vec<Article>, AppError>;

    /// Replaces the editable fields of an article and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: ArticleUpdate) -> Result<Article, AppError>;

    /// Deletes an article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Counts the articles filed under a category slug, drafts included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_by_category(&self, category: &str) -> Result<i64, AppError>;
}
