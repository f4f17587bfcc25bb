//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and asset URL resolution.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`memory`] - In-memory repositories used when no database is configured
//! - [`assets`] - Resolution of stored image references into displayable URLs

pub mod assets;
pub mod memory;
pub mod persistence;
