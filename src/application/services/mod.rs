//! Business logic services for the application layer.

pub mod article_service;
pub mod auth_service;
pub mod bio_service;
pub mod category_service;

pub use article_service::{ArticleInput, ArticleService, ImageInput};
pub use auth_service::{AuthService, Session, SessionError};
pub use bio_service::{BioInput, BioService};
pub use category_service::CategoryService;
