//! Category management service.

use crate::domain::entities::{Category, NewCategory};
use crate::domain::repositories::{ArticleRepository, CategoryRepository};
use crate::error::AppError;
use crate::utils::{generate_id, slugify};
use serde_json::json;
use std::sync::Arc;

/// Service for managing the categories articles are filed under.
///
/// Handles category CRUD operations with validation to ensure:
/// - Non-blank names
/// - Unique slugs, fixed at creation
/// - Safe deletion (categories still holding articles are kept)
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    articles: Arc<dyn ArticleRepository>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        articles: Arc<dyn ArticleRepository>,
    ) -> Self {
        Self {
            categories,
            articles,
        }
    }

    /// Lists all categories in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self) -> Result<Vec<Category>, AppError> {
        self.categories.list().await
    }

    /// Retrieves a category by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, id: i64) -> Result<Category, AppError> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found", json!({"id": id})))
    }

    /// Creates a category with a slug derived from its name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank.
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, name: String) -> Result<Category, AppError> {
        let name = Self::validate_name(&name)?;

        let mut slug = slugify(&name);
        if slug.is_empty() {
            slug = generate_id();
        }

        if self.categories.find_by_slug(&slug).await?.is_some() {
            return Err(AppError::conflict(
                "Category already exists",
                json!({"slug": slug}),
            ));
        }

        let created = self.categories.create(NewCategory { name, slug }).await?;

        metrics::counter!("content_writes_total", "kind" => "category").increment(1);
        tracing::info!(id = created.id, slug = %created.slug, "Category created");
        Ok(created)
    }

    /// Renames a category. Its slug, and therefore every article reference, is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank.
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn rename(&self, id: i64, name: String) -> Result<Category, AppError> {
        let name = Self::validate_name(&name)?;
        self.categories.rename(id, name).await
    }

    /// Deletes a category with safety checks.
    ///
    /// # Safety Checks
    ///
    /// - Cannot delete categories that still hold articles, drafts included
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Validation`] if the category still holds articles.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let category = self.get(id).await?;

        let articles_count = self.articles.count_by_category(&category.slug).await?;
        if articles_count > 0 {
            return Err(AppError::bad_request(
                "Cannot delete category with existing articles",
                json!({"articles_count": articles_count}),
            ));
        }

        self.categories.delete(id).await?;
        tracing::info!(id, slug = %category.slug, "Category deleted");
        Ok(())
    }

    fn validate_name(name: &str) -> Result<String, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::bad_request(
                "Category name is required",
                json!({"field": "name"}),
            ));
        }
        Ok(name.to_string())
    }
}
