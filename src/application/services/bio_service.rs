//! Bio management service.

use crate::domain::entities::{Bio, BioLink, BioUpdate};
use crate::domain::repositories::BioRepository;
use crate::error::AppError;
use crate::utils::generate_id;
use serde_json::json;
use std::sync::Arc;
use url::Url;

/// Text fields of the bio form.
#[derive(Debug, Clone, Default)]
pub struct BioInput {
    pub name: String,
    pub title: String,
    pub company: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub paragraph3: String,
}

/// Service for the site owner's bio and its named links.
///
/// The bio is a singleton: saving always replaces the one record. Link names
/// double as the entities linked inside the bio paragraphs.
pub struct BioService {
    repository: Arc<dyn BioRepository>,
}

impl BioService {
    /// Creates a new bio service.
    pub fn new(repository: Arc<dyn BioRepository>) -> Self {
        Self { repository }
    }

    /// Loads the bio, if one has been saved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self) -> Result<Option<Bio>, AppError> {
        self.repository.get().await
    }

    /// Saves the bio text fields, keeping the existing links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn save(&self, input: BioInput) -> Result<Bio, AppError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(AppError::bad_request(
                "Name is required",
                json!({"field": "name"}),
            ));
        }

        let links = self.current().await?.links;
        let saved = self
            .repository
            .save(BioUpdate {
                name: name.to_string(),
                title: input.title.trim().to_string(),
                company: input.company.trim().to_string(),
                paragraph1: input.paragraph1.trim().to_string(),
                paragraph2: input.paragraph2.trim().to_string(),
                paragraph3: input.paragraph3.trim().to_string(),
                links,
            })
            .await?;

        metrics::counter!("content_writes_total", "kind" => "bio").increment(1);
        Ok(saved)
    }

    /// Appends a named link.
    ///
    /// Works before any bio text has been saved; the bio is created empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank or the URL is invalid.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_link(&self, name: String, url: String) -> Result<Bio, AppError> {
        let (name, url) = Self::validate_link(&name, &url)?;

        let mut update = self.current().await?;
        update.links.push(BioLink {
            id: generate_id(),
            name,
            url,
        });

        self.repository.save(update).await
    }

    /// Replaces the name and URL of an existing link, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank or the URL is invalid.
    /// Returns [`AppError::NotFound`] if the link does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_link(&self, id: &str, name: String, url: String) -> Result<Bio, AppError> {
        let (name, url) = Self::validate_link(&name, &url)?;

        let mut update = self.current().await?;
        let link = update
            .links
            .iter_mut()
            .find(|link| link.id == id)
            .ok_or_else(|| AppError::not_found("Link not found", json!({"id": id})))?;
        link.name = name;
        link.url = url;

        self.repository.save(update).await
    }

    /// Removes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn remove_link(&self, id: &str) -> Result<Bio, AppError> {
        let mut update = self.current().await?;

        let before = update.links.len();
        update.links.retain(|link| link.id != id);
        if update.links.len() == before {
            return Err(AppError::not_found("Link not found", json!({"id": id})));
        }

        self.repository.save(update).await
    }

    /// Current bio as an update, or an empty one if nothing was saved yet.
    async fn current(&self) -> Result<BioUpdate, AppError> {
        Ok(self
            .repository
            .get()
            .await?
            .map(|bio| bio.to_update())
            .unwrap_or_default())
    }

    /// Validates a link's name and URL.
    ///
    /// # Validation
    ///
    /// - Name must not be blank
    /// - URL must be absolute with an `http`, `https` or `mailto` scheme
    fn validate_link(name: &str, url: &str) -> Result<(String, String), AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::bad_request(
                "Link name is required",
                json!({"field": "name"}),
            ));
        }

        let url = url.trim();
        let parsed = Url::parse(url).map_err(|e| {
            AppError::bad_request(
                "Invalid link URL",
                json!({"url": url, "reason": e.to_string()}),
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https" | "mailto") {
            return Err(AppError::bad_request(
                "Unsupported link URL scheme",
                json!({"allowed": ["http", "https", "mailto"]}),
            ));
        }

        Ok((name.to_string(), url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockBioRepository;
    use chrono::Utc;

    fn bio_from(update: BioUpdate) -> Bio {
        Bio {
            id: Bio::SINGLETON_ID,
            name: update.name,
            title: update.title,
            company: update.company,
            paragraph1: update.paragraph1,
            paragraph2: update.paragraph2,
            paragraph3: update.paragraph3,
            links: update.links,
            updated_at: Utc::now(),
        }
    }

    fn existing_bio() -> Bio {
        bio_from(BioUpdate {
            name: "Cat".to_string(),
            title: "@ Jupiter".to_string(),
            links: vec![BioLink {
                id: "l1".to_string(),
                name: "Jupiter".to_string(),
                url: "https://jup.ag".to_string(),
            }],
            ..BioUpdate::default()
        })
    }

    #[tokio::test]
    async fn test_save_keeps_links() {
        let mut mock_repo = MockBioRepository::new();

        mock_repo
            .expect_get()
            .times(1)
            .returning(|| Ok(Some(existing_bio())));
        mock_repo
            .expect_save()
            .withf(|update| update.name == "Cat B" && update.links.len() == 1)
            .times(1)
            .returning(|update| Ok(bio_from(update)));

        let service = BioService::new(Arc::new(mock_repo));

        let saved = service
            .save(BioInput {
                name: " Cat B ".to_string(),
                ..BioInput::default()
            })
            .await
            .unwrap();

        assert_eq!(saved.name, "Cat B");
        assert_eq!(saved.links[0].name, "Jupiter");
    }

    #[tokio::test]
    async fn test_save_requires_name() {
        let service = BioService::new(Arc::new(MockBioRepository::new()));

        let result = service.save(BioInput::default()).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_add_link_without_bio_creates_one() {
        let mut mock_repo = MockBioRepository::new();

        mock_repo.expect_get().returning(|| Ok(None));
        mock_repo
            .expect_save()
            .withf(|update| update.name.is_empty() && update.links.len() == 1)
            .times(1)
            .returning(|update| Ok(bio_from(update)));

        let service = BioService::new(Arc::new(mock_repo));

        let bio = service
            .add_link("Kyber".to_string(), "https://kyber.network".to_string())
            .await
            .unwrap();

        assert_eq!(bio.links[0].name, "Kyber");
        assert_eq!(bio.links[0].id.len(), 12);
    }

    #[tokio::test]
    async fn test_add_link_rejects_bad_urls() {
        let service = BioService::new(Arc::new(MockBioRepository::new()));

        let relative = service
            .add_link("Kyber".to_string(), "kyber.network".to_string())
            .await;
        assert!(matches!(relative.unwrap_err(), AppError::Validation { .. }));

        let script = service
            .add_link("Kyber".to_string(), "javascript:alert(1)".to_string())
            .await;
        assert!(matches!(script.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_link_keeps_position() {
        let mut mock_repo = MockBioRepository::new();

        mock_repo
            .expect_get()
            .returning(|| Ok(Some(existing_bio())));
        mock_repo
            .expect_save()
            .withf(|update| {
                update.links.len() == 1
                    && update.links[0].id == "l1"
                    && update.links[0].name == "Jupiter Exchange"
            })
            .times(1)
            .returning(|update| Ok(bio_from(update)));

        let service = BioService::new(Arc::new(mock_repo));

        let result = service
            .update_link(
                "l1",
                "Jupiter Exchange".to_string(),
                "https://jup.ag".to_string(),
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_remove_unknown_link() {
        let mut mock_repo = MockBioRepository::new();
        mock_repo
            .expect_get()
            .returning(|| Ok(Some(existing_bio())));

        let service = BioService::new(Arc::new(mock_repo));

        let result = service.remove_link("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
