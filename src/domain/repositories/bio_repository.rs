//! Repository trait for the singleton bio record.

use crate::domain::entities::{Bio, BioUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the site owner's bio.
///
/// There is at most one bio, stored under [`Bio::SINGLETON_ID`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBioRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryBioRepository`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BioRepository: Send + Sync {
    /// Loads the bio, if one has been saved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get(&self) -> Result<Option<Bio>, AppError>;

    /// Creates or replaces the bio.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, update: BioUpdate) -> Result<Bio, AppError>;
}
