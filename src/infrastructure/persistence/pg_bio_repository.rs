//! PostgreSQL implementation of bio repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::{Bio, BioLink, BioUpdate};
use crate::domain::repositories::BioRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct BioRow {
    id: i64,
    name: String,
    title: String,
    company: String,
    paragraph1: String,
    paragraph2: String,
    paragraph3: String,
    links: Json<Vec<BioLink>>,
    updated_at: DateTime<Utc>,
}

impl From<BioRow> for Bio {
    fn from(row: BioRow) -> Self {
        Bio {
            id: row.id,
            name: row.name,
            title: row.title,
            company: row.company,
            paragraph1: row.paragraph1,
            paragraph2: row.paragraph2,
            paragraph3: row.paragraph3,
            links: row.links.0,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for the singleton bio row.
///
/// Saving is an upsert on [`Bio::SINGLETON_ID`].
pub struct PgBioRepository {
    pool: Arc<PgPool>,
}

impl PgBioRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BioRepository for PgBioRepository {
    async fn get(&self) -> Result<Option<Bio>, AppError> {
        let row = sqlx::query_as::<_, BioRow>(
            r#"
            SELECT id, name, title, company, paragraph1, paragraph2, paragraph3, links, updated_at
            FROM bio
            WHERE id = $1
            "#,
        )
        .bind(Bio::SINGLETON_ID)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Bio::from))
    }

    async fn save(&self, update: BioUpdate) -> Result<Bio, AppError> {
        let row = sqlx::query_as::<_, BioRow>(
            r#"
            INSERT INTO bio (id, name, title, company, paragraph1, paragraph2, paragraph3, links)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                name       = EXCLUDED.name,
                title      = EXCLUDED.title,
                company    = EXCLUDED.company,
                paragraph1 = EXCLUDED.paragraph1,
                paragraph2 = EXCLUDED.paragraph2,
                paragraph3 = EXCLUDED.paragraph3,
                links      = EXCLUDED.links,
                updated_at = NOW()
            RETURNING id, name, title, company, paragraph1, paragraph2, paragraph3, links, updated_at
            "#,
        )
        .bind(Bio::SINGLETON_ID)
        .bind(&update.name)
        .bind(&update.title)
        .bind(&update.company)
        .bind(&update.paragraph1)
        .bind(&update.paragraph2)
        .bind(&update.paragraph3)
        .bind(Json(&update.links))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
