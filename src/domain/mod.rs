//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture principles.
//! It defines entities, repository interfaces, and the content transforms that
//! turn stored bodies into display structure, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`content`] - Paragraph renderer and entity linker
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod content;
pub mod entities;
pub mod repositories;
