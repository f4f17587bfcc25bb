//! Category entity grouping articles on the home page.

use chrono::{DateTime, Utc};

/// A named group of articles.
///
/// Articles reference their category by `slug`, which stays fixed when the
/// category is renamed.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(id: i64, name: String, slug: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            slug,
            created_at,
        }
    }
}

/// Input data for creating a new category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
}
