//! Public site pages: home and article detail.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::state::AppState;
use crate::web::error::PageError;
use crate::web::views::{BioView, BlockView, ImageView, SectionView, body_blocks, image_views};

/// Template for the home page.
///
/// Renders `templates/home.html` with:
/// - Bio header and linked paragraphs
/// - Every category with its published articles
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    site_name: String,
    has_bio: bool,
    bio: BioView,
    sections: Vec<SectionView>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> Result<impl IntoResponse, PageError> {
    let bio = state.bio_service.get().await?;
    let categories = state.category_service.list().await?;

    let mut sections = Vec::with_capacity(categories.len());
    for category in &categories {
        let articles = state.article_service.list_published(&category.slug).await?;
        sections.push(SectionView::new(category, &articles));
    }

    metrics::counter!("page_views_total", "page" => "home").increment(1);

    Ok(HomeTemplate {
        site_name: state.site_name.to_string(),
        has_bio: bio.is_some(),
        bio: bio.as_ref().map(BioView::from_bio).unwrap_or_else(BioView::empty),
        sections,
    })
}

/// Template for a single article.
#[derive(Template, WebTemplate)]
#[template(path = "article.html")]
pub struct ArticleTemplate {
    site_name: String,
    title: String,
    category_name: String,
    images: Vec<ImageView>,
    blocks: Vec<BlockView>,
}

/// Renders a published article.
///
/// # Endpoint
///
/// `GET /article/{slug}`
///
/// Drafts and unknown slugs render the not-found page.
pub async fn article_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, PageError> {
    let article = state.article_service.get_published(&slug).await?;

    let category_name = state
        .category_service
        .list()
        .await?
        .into_iter()
        .find(|c| c.slug == article.category)
        .map(|c| c.name)
        .unwrap_or_else(|| article.category.clone());

    metrics::counter!("page_views_total", "page" => "article").increment(1);

    Ok(ArticleTemplate {
        site_name: state.site_name.to_string(),
        images: image_views(&article.images, &state.assets),
        blocks: body_blocks(&article.content),
        title: article.title,
        category_name,
    })
}
