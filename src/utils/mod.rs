//! Utility functions for identifier and slug generation.
//!
//! - [`id_generator`] - Random URL-safe identifiers for images, links and fallback slugs
//! - [`slug`] - Title-to-slug conversion

pub mod id_generator;
pub mod slug;

pub use id_generator::generate_id;
pub use slug::slugify;
