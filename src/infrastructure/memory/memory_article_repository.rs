//! In-memory implementation of article repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{Article, ArticleUpdate, NewArticle};
use crate::domain::repositories::ArticleRepository;
use crate::error::AppError;

#[derive(Default)]
struct Rows {
    next_id: i64,
    articles: Vec<Article>,
}

/// Process-local article store.
#[derive(Default)]
pub struct MemoryArticleRepository {
    rows: RwLock<Rows>,
}

impl MemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleRepository for MemoryArticleRepository {
    async fn create(&self, new_article: NewArticle) -> Result<Article, AppError> {
        let mut rows = self.rows.write().await;

        if rows.articles.iter().any(|a| a.slug == new_article.slug) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({"constraint": "articles_slug_key"}),
            ));
        }

        rows.next_id += 1;
        let now = Utc::now();
        let article = Article {
            id: rows.next_id,
            title: new_article.title,
            content: new_article.content,
            category: new_article.category,
            slug: new_article.slug,
            published: new_article.published,
            images: new_article.images,
            created_at: now,
            updated_at: now,
        };
        rows.articles.push(article.clone());

        Ok(article)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.articles.iter().find(|a| a.slug == slug).cloned())
    }

    async fn list(&self) -> Result<Vec<Article>, AppError> {
        Ok(self.rows.read().await.articles.clone())
    }

    async fn list_by_category(
        &self,
        category: &str,
        only_published: bool,
    ) -> Result<Vec<Article>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows
            .articles
            .iter()
            .filter(|a| a.category == category && (!only_published || a.published))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, update: ArticleUpdate) -> Result<Article, AppError> {
        let mut rows = self.rows.write().await;
        let article = rows
            .articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::not_found("Article not found", json!({"id": id})))?;

        article.title = update.title;
        article.content = update.content;
        article.category = update.category;
        article.published = update.published;
        article.images = update.images;
        article.updated_at = Utc::now();

        Ok(article.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.articles.len();
        rows.articles.retain(|a| a.id != id);

        if rows.articles.len() == before {
            return Err(AppError::not_found("Article not found", json!({"id": id})));
        }

        Ok(())
    }

    async fn count_by_category(&self, category: &str) -> Result<i64, AppError> {
        let rows = self.rows.read().await;
        let count = rows.articles.iter().filter(|a| a.category == category).count();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }
}
