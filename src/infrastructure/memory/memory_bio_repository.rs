//! In-memory implementation of bio repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::{Bio, BioUpdate};
use crate::domain::repositories::BioRepository;
use crate::error::AppError;

/// Process-local bio store holding at most one record.
#[derive(Default)]
pub struct MemoryBioRepository {
    bio: RwLock<Option<Bio>>,
}

impl MemoryBioRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BioRepository for MemoryBioRepository {
    async fn get(&self) -> Result<Option<Bio>, AppError> {
        Ok(self.bio.read().await.clone())
    }

    async fn save(&self, update: BioUpdate) -> Result<Bio, AppError> {
        let bio = Bio {
            id: Bio::SINGLETON_ID,
            name: update.name,
            title: update.title,
            company: update.company,
            paragraph1: update.paragraph1,
            paragraph2: update.paragraph2,
            paragraph3: update.paragraph3,
            links: update.links,
            updated_at: Utc::now(),
        };

        *self.bio.write().await = Some(bio.clone());
        Ok(bio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_replaces_singleton() {
        let repo = MemoryBioRepository::new();
        assert!(repo.get().await.unwrap().is_none());

        repo.save(BioUpdate {
            name: "First".to_string(),
            ..BioUpdate::default()
        })
        .await
        .unwrap();
        repo.save(BioUpdate {
            name: "Second".to_string(),
            ..BioUpdate::default()
        })
        .await
        .unwrap();

        let bio = repo.get().await.unwrap().unwrap();
        assert_eq!(bio.id, Bio::SINGLETON_ID);
        assert_eq!(bio.name, "Second");
    }
}
