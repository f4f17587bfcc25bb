//! PostgreSQL implementation of article repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::{Article, ArticleImage, ArticleUpdate, NewArticle};
use crate::domain::repositories::ArticleRepository;
use crate::error::AppError;

const ARTICLE_COLUMNS: &str =
    "id, title, content, category, slug, published, images, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    category: String,
    slug: String,
    published: bool,
    images: Json<Vec<ArticleImage>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article {
            id: row.id,
            title: row.title,
            content: row.content,
            category: row.category,
            slug: row.slug,
            published: row.published,
            images: row.images.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for articles.
///
/// Images are stored inline as a JSONB array. The unique `articles_slug_key`
/// constraint surfaces as [`AppError::Conflict`].
pub struct PgArticleRepository {
    pool: Arc<PgPool>,
}

impl PgArticleRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    async fn create(&self, new_article: NewArticle) -> Result<Article, AppError> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            r#"
            INSERT INTO articles (title, content, category, slug, published, images)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {ARTICLE_COLUMNS}
            "#
        ))
        .bind(&new_article.title)
        .bind(&new_article.content)
        .bind(&new_article.category)
        .bind(&new_article.slug)
        .bind(new_article.published)
        .bind(Json(&new_article.images))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Article::from))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Article>, AppError> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Article::from))
    }

    async fn list(&self) -> Result<Vec<Article>, AppError> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at, id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn list_by_category(
        &self,
        category: &str,
        only_published: bool,
    ) -> Result<Vec<Article>, AppError> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            r#"
            SELECT {ARTICLE_COLUMNS}
            FROM articles
            WHERE category = $1
              AND ($2 = FALSE OR published = TRUE)
            ORDER BY created_at, id
            "#
        ))
        .bind(category)
        .bind(only_published)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn update(&self, id: i64, update: ArticleUpdate) -> Result<Article, AppError> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            r#"
            UPDATE articles SET
                title      = $2,
                content    = $3,
                category   = $4,
                published  = $5,
                images     = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {ARTICLE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&update.title)
        .bind(&update.content)
        .bind(&update.category)
        .bind(update.published)
        .bind(Json(&update.images))
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Article::from)
            .ok_or_else(|| AppError::not_found("Article not found", json!({"id": id})))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Article not found", json!({"id": id})));
        }

        Ok(())
    }

    async fn count_by_category(&self, category: &str) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles WHERE category = $1")
            .bind(category)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
