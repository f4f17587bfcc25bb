//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ArticleService, AuthService, BioService, CategoryService};
use crate::config::Config;
use crate::domain::repositories::{ArticleRepository, BioRepository, CategoryRepository};
use crate::error::AppError;
use crate::infrastructure::assets::AssetResolver;
use crate::infrastructure::memory::{
    MemoryArticleRepository, MemoryBioRepository, MemoryCategoryRepository,
};
use crate::infrastructure::persistence::{
    PgArticleRepository, PgBioRepository, PgCategoryRepository,
};

/// Backing store selected at startup.
#[derive(Clone)]
pub enum Store {
    Postgres(Arc<PgPool>),
    Memory,
}

impl Store {
    /// Short label used in logs and the health report.
    pub fn name(&self) -> &'static str {
        match self {
            Store::Postgres(_) => "postgres",
            Store::Memory => "memory",
        }
    }

    /// Checks that the store answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if PostgreSQL is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        match self {
            Store::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool.as_ref()).await?;
                Ok(())
            }
            Store::Memory => Ok(()),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub article_service: Arc<ArticleService>,
    pub category_service: Arc<CategoryService>,
    pub bio_service: Arc<BioService>,
    pub auth_service: Arc<AuthService>,
    pub assets: Arc<AssetResolver>,
    pub site_name: Arc<str>,
}

impl AppState {
    /// Wires repositories for `store` into the services.
    ///
    /// # Errors
    ///
    /// Returns an error if `ASSET_BASE_URL` is not a valid HTTP(S) URL.
    pub fn new(store: Store, config: &Config) -> anyhow::Result<Self> {
        let (articles, categories, bio): (
            Arc<dyn ArticleRepository>,
            Arc<dyn CategoryRepository>,
            Arc<dyn BioRepository>,
        ) = match &store {
            Store::Postgres(pool) => (
                Arc::new(PgArticleRepository::new(pool.clone())),
                Arc::new(PgCategoryRepository::new(pool.clone())),
                Arc::new(PgBioRepository::new(pool.clone())),
            ),
            Store::Memory => (
                Arc::new(MemoryArticleRepository::new()),
                Arc::new(MemoryCategoryRepository::new()),
                Arc::new(MemoryBioRepository::new()),
            ),
        };

        let assets = AssetResolver::new(config.asset_base_url.as_deref())?;

        Ok(Self {
            store,
            article_service: Arc::new(ArticleService::new(articles.clone(), categories.clone())),
            category_service: Arc::new(CategoryService::new(categories, articles)),
            bio_service: Arc::new(BioService::new(bio)),
            auth_service: Arc::new(AuthService::new(
                config.admin_passphrase.clone(),
                config.session_secret.clone(),
                config.session_ttl_seconds,
            )),
            assets: Arc::new(assets),
            site_name: Arc::from(config.site_name.as_str()),
        })
    }
}
