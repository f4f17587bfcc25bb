//! Admin console page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};
use std::collections::HashMap;

use crate::domain::entities::{Article, Bio, Category};
use crate::state::AppState;
use crate::web::error::PageError;
use crate::web::views::{BioView, BlockView, ImageView, image_views, preview_blocks};

/// Explains the body markup next to the content field.
const CONTENT_HINT: &str = "Separate paragraphs with a blank line. Wrap a whole paragraph in ** \
     to make it a heading. Start a line with • to make it a bullet.";

/// Console tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Articles,
    Categories,
    Bio,
}

impl Tab {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("categories") => Tab::Categories,
            Some("bio") => Tab::Bio,
            _ => Tab::Articles,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Articles => "articles",
            Tab::Categories => "categories",
            Tab::Bio => "bio",
        }
    }
}

/// Builds the redirect back to a console tab with a success notice.
pub fn back_to(tab: Tab, notice: &str) -> Redirect {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("tab", tab.as_str())
        .append_pair("notice", notice)
        .finish();
    Redirect::to(&format!("/admin?{query}"))
}

/// Builds the redirect back to the edit form of one article.
pub fn back_to_article(id: i64, notice: &str) -> Redirect {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("tab", Tab::Articles.as_str())
        .append_pair("edit", &id.to_string())
        .append_pair("notice", notice)
        .finish();
    Redirect::to(&format!("/admin?{query}"))
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    pub tab: Option<String>,
    /// Article being edited.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub edit: Option<i64>,
    pub notice: Option<String>,
}

pub struct CategoryRowView {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub article_count: usize,
}

pub struct ArticleRowView {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub category_name: String,
    pub published: bool,
    pub image_count: usize,
}

pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub struct ArticleFormView {
    pub is_edit: bool,
    pub id: i64,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub category_options: Vec<OptionView>,
    pub images: Vec<ImageView>,
}

pub struct BioFormView {
    pub name: String,
    pub title: String,
    pub company: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub paragraph3: String,
}

pub struct LinkRowView {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// Template for the admin console.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    site_name: String,
    tab_articles: bool,
    tab_categories: bool,
    tab_bio: bool,
    has_notice: bool,
    notice: String,
    content_hint: &'static str,
    categories: Vec<CategoryRowView>,
    articles: Vec<ArticleRowView>,
    form: ArticleFormView,
    has_preview: bool,
    preview_title: String,
    preview_images: Vec<ImageView>,
    /// Rendered body of the article being edited.
    blocks: Vec<BlockView>,
    bio_form: BioFormView,
    links: Vec<LinkRowView>,
    has_bio_preview: bool,
    bio_preview: BioView,
}

fn category_rows(categories: &[Category], articles: &[Article]) -> Vec<CategoryRowView> {
    categories
        .iter()
        .map(|c| CategoryRowView {
            id: c.id,
            name: c.name.clone(),
            slug: c.slug.clone(),
            article_count: articles.iter().filter(|a| a.category == c.slug).count(),
        })
        .collect()
}

fn article_rows(articles: &[Article], names: &HashMap<&str, &str>) -> Vec<ArticleRowView> {
    articles
        .iter()
        .map(|a| ArticleRowView {
            id: a.id,
            title: a.title.clone(),
            slug: a.slug.clone(),
            category_name: names
                .get(a.category.as_str())
                .map_or_else(|| a.category.clone(), |n| n.to_string()),
            published: a.published,
            image_count: a.images.len(),
        })
        .collect()
}

fn bio_form(bio: Option<&Bio>) -> BioFormView {
    match bio {
        Some(bio) => BioFormView {
            name: bio.name.clone(),
            title: bio.title.clone(),
            company: bio.company.clone(),
            paragraph1: bio.paragraph1.clone(),
            paragraph2: bio.paragraph2.clone(),
            paragraph3: bio.paragraph3.clone(),
        },
        None => BioFormView {
            name: String::new(),
            title: String::new(),
            company: String::new(),
            paragraph1: String::new(),
            paragraph2: String::new(),
            paragraph3: String::new(),
        },
    }
}

/// Renders the admin console.
///
/// # Endpoint
///
/// `GET /admin?tab=articles|categories|bio&edit={id}&notice=...`
///
/// With `edit`, the article form is pre-filled and a preview of the saved
/// article (title, images, rendered body) is shown.
///
/// # Errors
///
/// Renders the not-found page if `edit` names a missing article.
pub async fn admin_handler(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<impl IntoResponse, PageError> {
    let tab = Tab::parse(query.tab.as_deref());

    let categories = state.category_service.list().await?;
    let articles = state.article_service.list_all().await?;
    let bio = state.bio_service.get().await?;

    let editing = match query.edit {
        Some(id) => Some(state.article_service.get(id).await?),
        None => None,
    };

    let names: HashMap<&str, &str> = categories
        .iter()
        .map(|c| (c.slug.as_str(), c.name.as_str()))
        .collect();

    let selected_category = editing.as_ref().map(|a| a.category.as_str());
    let form = ArticleFormView {
        is_edit: editing.is_some(),
        id: editing.as_ref().map_or(0, |a| a.id),
        title: editing.as_ref().map(|a| a.title.clone()).unwrap_or_default(),
        content: editing
            .as_ref()
            .map(|a| a.content.clone())
            .unwrap_or_default(),
        published: editing.as_ref().is_some_and(|a| a.published),
        category_options: categories
            .iter()
            .map(|c| OptionView {
                value: c.slug.clone(),
                label: c.name.clone(),
                selected: selected_category == Some(c.slug.as_str()),
            })
            .collect(),
        images: editing
            .as_ref()
            .map(|a| {
                a.images
                    .iter()
                    .map(|image| ImageView::from_image(image, &state.assets))
                    .collect()
            })
            .unwrap_or_default(),
    };

    let notice = query.notice.unwrap_or_default();

    Ok(AdminTemplate {
        site_name: state.site_name.to_string(),
        tab_articles: tab == Tab::Articles,
        tab_categories: tab == Tab::Categories,
        tab_bio: tab == Tab::Bio,
        has_notice: !notice.is_empty(),
        notice,
        content_hint: CONTENT_HINT,
        categories: category_rows(&categories, &articles),
        articles: article_rows(&articles, &names),
        has_preview: editing.is_some(),
        preview_title: editing.as_ref().map(|a| a.title.clone()).unwrap_or_default(),
        preview_images: editing
            .as_ref()
            .map(|a| image_views(&a.images, &state.assets))
            .unwrap_or_default(),
        blocks: editing
            .as_ref()
            .map(|a| preview_blocks(&a.content))
            .unwrap_or_default(),
        form,
        bio_form: bio_form(bio.as_ref()),
        links: bio
            .as_ref()
            .map(|b| {
                b.links
                    .iter()
                    .map(|l| LinkRowView {
                        id: l.id.clone(),
                        name: l.name.clone(),
                        url: l.url.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default(),
        has_bio_preview: bio.is_some(),
        bio_preview: bio
            .as_ref()
            .map(BioView::from_bio)
            .unwrap_or_else(BioView::empty),
    })
}
