//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row structs. Embedded lists (article
//! images, bio links) are stored as JSONB.
//!
//! # Repositories
//!
//! - [`PgArticleRepository`] - Article storage and category listings
//! - [`PgCategoryRepository`] - Category management
//! - [`PgBioRepository`] - Singleton bio upsert

pub mod pg_article_repository;
pub mod pg_bio_repository;
pub mod pg_category_repository;

pub use pg_article_repository::PgArticleRepository;
pub use pg_bio_repository::PgBioRepository;
pub use pg_category_repository::PgCategoryRepository;
