//! DTOs for category management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Category;

/// Request body for `POST /api/categories` and `PATCH /api/categories/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Individual category information.
#[derive(Debug, Serialize)]
pub struct CategoryItem {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryItem {
    fn from(c: Category) -> Self {
        CategoryItem {
            id: c.id,
            name: c.name,
            slug: c.slug,
            created_at: c.created_at,
        }
    }
}

/// Response containing list of categories.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub items: Vec<CategoryItem>,
}
