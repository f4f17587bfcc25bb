//! In-memory repository implementations.
//!
//! Used when no database is configured and by the integration tests. Data
//! lives for the lifetime of the process. Each repository guards its rows with
//! a `tokio::sync::RwLock`, so reads run concurrently and writes are serialised.
//!
//! Behaviour mirrors the PostgreSQL repositories: creation order listings,
//! unique slugs reported as [`crate::error::AppError::Conflict`], and
//! [`crate::error::AppError::NotFound`] on updates to missing rows.

pub mod memory_article_repository;
pub mod memory_bio_repository;
pub mod memory_category_repository;

pub use memory_article_repository::MemoryArticleRepository;
pub use memory_bio_repository::MemoryBioRepository;
pub use memory_category_repository::MemoryCategoryRepository;
