//! Browser-facing layer: the public site and the admin console.
//!
//! Pages are rendered server-side with Askama templates. Templates only see
//! the view models in [`views`].
//!
//! # Modules
//!
//! - [`handlers`] - Page and form handlers
//! - [`middleware`] - Cookie session check for the console
//! - [`routes`] - Web route configuration
//! - [`error`] - HTML error pages

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod views;
