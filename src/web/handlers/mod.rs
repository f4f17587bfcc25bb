//! HTML handlers for the public site and the admin console.

pub mod admin;
mod admin_articles;
mod admin_bio;
mod admin_categories;
mod login;
mod public;

pub use admin::admin_handler;
pub use admin_articles::{
    add_image_handler, create_article_handler, delete_article_handler, delete_image_handler,
    update_article_handler,
};
pub use admin_bio::{add_link_handler, delete_link_handler, save_bio_handler, update_link_handler};
pub use admin_categories::{
    create_category_handler, delete_category_handler, rename_category_handler,
};
pub use login::{login_page_handler, login_submit_handler, logout_handler};
pub use public::{article_handler, home_handler};
