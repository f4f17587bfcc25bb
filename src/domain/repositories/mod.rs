//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - PostgreSQL implementations live in `crate::infrastructure::persistence`
//! - In-memory implementations live in `crate::infrastructure::memory`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ArticleRepository`] - Article CRUD and category lookups
//! - [`CategoryRepository`] - Category CRUD
//! - [`BioRepository`] - The singleton bio record

pub mod article_repository;
pub mod bio_repository;
pub mod category_repository;

pub use article_repository::ArticleRepository;
pub use bio_repository::BioRepository;
pub use category_repository::CategoryRepository;

#[cfg(test)]
pub use article_repository::MockArticleRepository;
#[cfg(test)]
pub use bio_repository::MockBioRepository;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
