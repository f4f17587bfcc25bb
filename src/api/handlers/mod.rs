//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod articles;
pub mod bio;
pub mod categories;
pub mod health;
pub mod preview;
pub mod session;

pub use articles::{
    add_image_handler, article_list_handler, create_article_handler, delete_article_handler,
    delete_image_handler, get_article_handler, update_article_handler,
};
pub use bio::{
    add_link_handler, delete_link_handler, get_bio_handler, put_bio_handler, update_link_handler,
};
pub use categories::{
    category_list_handler, create_category_handler, delete_category_handler,
    rename_category_handler,
};
pub use health::health_handler;
pub use preview::preview_handler;
pub use session::login_handler;
