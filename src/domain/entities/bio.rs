//! Bio entity: the site owner's profile block.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::content::{LinkEntity, Span, linkify};

/// The single profile block shown at the top of the home page.
#[derive(Debug, Clone)]
pub struct Bio {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub company: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub paragraph3: String,
    pub links: Vec<BioLink>,
    pub updated_at: DateTime<Utc>,
}

impl Bio {
    /// Row id of the singleton bio record.
    pub const SINGLETON_ID: i64 = 1;

    /// The bio's links as linker entities, in stored order.
    pub fn link_entities(&self) -> Vec<LinkEntity> {
        self.links.iter().map(LinkEntity::from).collect()
    }

    /// Non-empty paragraphs in display order.
    pub fn paragraphs(&self) -> Vec<&str> {
        [&self.paragraph1, &self.paragraph2, &self.paragraph3]
            .into_iter()
            .map(String::as_str)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Non-empty paragraphs with the bio's link names turned into links.
    pub fn linked_paragraphs(&self) -> Vec<Vec<Span>> {
        let entities = self.link_entities();
        self.paragraphs()
            .into_iter()
            .map(|p| linkify(p, &entities))
            .collect()
    }

    /// URL of the first link, which the home page header points the title at.
    pub fn primary_link(&self) -> Option<&BioLink> {
        self.links.first()
    }

    /// Returns the editable fields as an update, for read-modify-write changes.
    pub fn to_update(&self) -> BioUpdate {
        BioUpdate {
            name: self.name.clone(),
            title: self.title.clone(),
            company: self.company.clone(),
            paragraph1: self.paragraph1.clone(),
            paragraph2: self.paragraph2.clone(),
            paragraph3: self.paragraph3.clone(),
            links: self.links.clone(),
        }
    }
}

/// A named link owned by the bio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioLink {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl From<&BioLink> for LinkEntity {
    fn from(link: &BioLink) -> Self {
        LinkEntity::new(link.name.clone(), link.url.clone())
    }
}

/// Replacement values for the bio.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BioUpdate {
    pub name: String,
    pub title: String,
    pub company: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub paragraph3: String,
    pub links: Vec<BioLink>,
}
