//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod article;
pub mod bio;
pub mod category;
pub mod health;
pub mod preview;
pub mod session;
