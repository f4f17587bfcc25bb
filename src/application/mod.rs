//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers and the operator CLI.
//!
//! # Available Services
//!
//! - [`services::article_service::ArticleService`] - Article CRUD, publishing and images
//! - [`services::category_service::CategoryService`] - Category management
//! - [`services::bio_service::BioService`] - The singleton bio and its links
//! - [`services::auth_service::AuthService`] - Passphrase login and session tokens

pub mod services;
