//! In-memory implementation of category repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{Category, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;

#[derive(Default)]
struct Rows {
    next_id: i64,
    categories: Vec<Category>,
}

/// Process-local category store.
#[derive(Default)]
pub struct MemoryCategoryRepository {
    rows: RwLock<Rows>,
}

impl MemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let mut rows = self.rows.write().await;

        if rows.categories.iter().any(|c| c.slug == new_category.slug) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({"constraint": "categories_slug_key"}),
            ));
        }

        rows.next_id += 1;
        let category = Category::new(
            rows.next_id,
            new_category.name,
            new_category.slug,
            Utc::now(),
        );
        rows.categories.push(category.clone());

        Ok(category)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.categories.iter().find(|c| c.slug == slug).cloned())
    }

    async fn list(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.rows.read().await.categories.clone())
    }

    async fn rename(&self, id: i64, name: String) -> Result<Category, AppError> {
        let mut rows = self.rows.write().await;
        let category = rows
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found("Category not found", json!({"id": id})))?;

        category.name = name;
        Ok(category.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.categories.len();
        rows.categories.retain(|c| c.id != id);

        if rows.categories.len() == before {
            return Err(AppError::not_found("Category not found", json!({"id": id})));
        }

        Ok(())
    }
}
