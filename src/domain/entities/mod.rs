//! Core domain entities representing the site's content model.
//!
//! Entities are plain data structures. Rendering rules live in
//! [`crate::domain::content`], orchestration in the application services.
//!
//! # Entity Types
//!
//! - [`Article`] - A titled body of text filed under a category
//! - [`ArticleImage`] - An image reference attached to an article
//! - [`Category`] - A named group of articles
//! - [`Bio`] - The site owner's profile block
//! - [`BioLink`] - A named link belonging to the bio
//!
//! # Design Pattern
//!
//! Persisted entities have separate structs for writes:
//! - `NewArticle`, `NewCategory` - For creating new records
//! - `ArticleUpdate`, `BioUpdate` - For replacing editable fields

pub mod article;
pub mod bio;
pub mod category;

pub use article::{Article, ArticleImage, ArticleUpdate, NewArticle};
pub use bio::{Bio, BioLink, BioUpdate};
pub use category::{Category, NewCategory};
