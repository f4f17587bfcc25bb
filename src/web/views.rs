//! Template view models.
//!
//! Templates only read plain fields and boolean flags; every decision about
//! what to show is made here.

use url::Url;

use crate::domain::content::{Block, BulletLine, Span};
use crate::domain::entities::{Article, ArticleImage, Bio, Category};
use crate::infrastructure::assets::AssetResolver;

/// Placeholder shown in edit previews for paragraphs without visible text.
pub const EMPTY_PARAGRAPH_PLACEHOLDER: &str = "(empty paragraph)";

/// Returns `url` if it is an absolute `http`, `https` or `mailto` URL.
fn usable_href(url: &str) -> Option<String> {
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https" | "mailto") => {
            Some(url.to_string())
        }
        _ => None,
    }
}

/// Returns `url` if it is an absolute `http`, `https` or `mailto` URL, else `#`.
pub fn safe_href(url: &str) -> String {
    usable_href(url).unwrap_or_else(|| "#".to_string())
}

pub struct LineView {
    pub is_bullet: bool,
    pub text: String,
}

pub struct BlockView {
    pub is_heading: bool,
    pub is_bullets: bool,
    /// Plain paragraph with no visible text, shown as a placeholder in previews.
    pub is_blank: bool,
    pub text: String,
    pub lines: Vec<LineView>,
}

impl BlockView {
    pub fn from_block(block: &Block) -> Self {
        let is_blank = block.is_blank();
        match block {
            Block::Heading { text } => BlockView {
                is_heading: true,
                is_bullets: false,
                is_blank,
                text: text.clone(),
                lines: Vec::new(),
            },
            Block::BulletBlock { lines } => BlockView {
                is_heading: false,
                is_bullets: true,
                is_blank,
                text: String::new(),
                lines: lines
                    .iter()
                    .map(|line| match line {
                        BulletLine::Bullet { text } => LineView {
                            is_bullet: true,
                            text: text.clone(),
                        },
                        BulletLine::Plain { text } => LineView {
                            is_bullet: false,
                            text: text.clone(),
                        },
                    })
                    .collect(),
            },
            Block::PlainParagraph { text } => BlockView {
                is_heading: false,
                is_bullets: false,
                is_blank,
                text: text.clone(),
                lines: Vec::new(),
            },
        }
    }
}

/// Renders a body for the public page. Blank paragraphs are dropped.
pub fn body_blocks(content: &str) -> Vec<BlockView> {
    crate::domain::content::render(content)
        .iter()
        .filter(|block| !block.is_blank())
        .map(BlockView::from_block)
        .collect()
}

/// Renders a body for an edit preview, keeping blank paragraphs as placeholders.
pub fn preview_blocks(content: &str) -> Vec<BlockView> {
    crate::domain::content::render(content)
        .iter()
        .map(|block| {
            let mut view = BlockView::from_block(block);
            if view.is_blank {
                view.text = EMPTY_PARAGRAPH_PLACEHOLDER.to_string();
            }
            view
        })
        .collect()
}

pub struct SpanView {
    pub is_link: bool,
    pub text: String,
    pub href: String,
}

impl From<&Span> for SpanView {
    fn from(span: &Span) -> Self {
        match span {
            Span::Plain { text } => SpanView {
                is_link: false,
                text: text.clone(),
                href: String::new(),
            },
            Span::Link { text, url } => SpanView {
                is_link: true,
                text: text.clone(),
                href: safe_href(url),
            },
        }
    }
}

pub struct ImageView {
    pub id: String,
    pub url: String,
    pub src: String,
    pub alt: String,
    pub caption: String,
    pub has_caption: bool,
}

impl ImageView {
    pub fn from_image(image: &ArticleImage, assets: &AssetResolver) -> Self {
        let caption = image.caption.clone().unwrap_or_default();
        ImageView {
            id: image.id.clone(),
            url: image.url.clone(),
            src: assets.resolve(&image.url),
            alt: image.alt.clone(),
            has_caption: !caption.is_empty(),
            caption,
        }
    }
}

pub fn image_views(images: &[ArticleImage], assets: &AssetResolver) -> Vec<ImageView> {
    images
        .iter()
        .map(|image| ImageView::from_image(image, assets))
        .filter(|view| !view.src.is_empty())
        .collect()
}

/// Bio header and linked paragraphs as shown on the home page and the admin preview.
pub struct BioView {
    pub name: String,
    pub title: String,
    pub has_primary_link: bool,
    pub primary_href: String,
    pub paragraphs: Vec<Vec<SpanView>>,
}

impl BioView {
    pub fn empty() -> Self {
        BioView {
            name: String::new(),
            title: String::new(),
            has_primary_link: false,
            primary_href: String::new(),
            paragraphs: Vec::new(),
        }
    }

    pub fn from_bio(bio: &Bio) -> Self {
        // The title stays plain text unless the first link has a usable URL.
        let primary_href = bio.primary_link().and_then(|link| usable_href(&link.url));

        BioView {
            name: bio.name.clone(),
            title: bio.title.clone(),
            has_primary_link: primary_href.is_some(),
            primary_href: primary_href.unwrap_or_default(),
            paragraphs: bio
                .linked_paragraphs()
                .iter()
                .map(|spans| spans.iter().map(SpanView::from).collect())
                .collect(),
        }
    }
}

pub struct ArticleLinkView {
    pub title: String,
    pub slug: String,
}

/// A category with its published articles on the home page.
pub struct SectionView {
    pub name: String,
    pub articles: Vec<ArticleLinkView>,
}

impl SectionView {
    pub fn new(category: &Category, articles: &[Article]) -> Self {
        SectionView {
            name: category.name.clone(),
            articles: articles
                .iter()
                .map(|a| ArticleLinkView {
                    title: a.title.clone(),
                    slug: a.slug.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BioLink;
    use chrono::Utc;

    fn bio_with_links(urls: &[&str]) -> Bio {
        Bio {
            id: Bio::SINGLETON_ID,
            name: "Ada".to_string(),
            title: "Engineer".to_string(),
            company: String::new(),
            paragraph1: String::new(),
            paragraph2: String::new(),
            paragraph3: String::new(),
            links: urls
                .iter()
                .enumerate()
                .map(|(i, url)| BioLink {
                    id: i.to_string(),
                    name: format!("Link {i}"),
                    url: url.to_string(),
                })
                .collect(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_bio_title_links_to_first_usable_url() {
        let view = BioView::from_bio(&bio_with_links(&["https://jup.ag", "https://x.com"]));
        assert!(view.has_primary_link);
        assert_eq!(view.primary_href, "https://jup.ag");
    }

    #[test]
    fn test_bio_title_unlinked_without_links() {
        let view = BioView::from_bio(&bio_with_links(&[]));
        assert!(!view.has_primary_link);
        assert!(view.primary_href.is_empty());
    }

    #[test]
    fn test_bio_title_unlinked_for_unusable_scheme() {
        let view = BioView::from_bio(&bio_with_links(&["javascript:alert(1)"]));
        assert!(!view.has_primary_link);
        assert!(view.primary_href.is_empty());
    }

    #[test]
    fn test_safe_href() {
        assert_eq!(safe_href("https://jup.ag"), "https://jup.ag");
        assert_eq!(safe_href("mailto:me@example.com"), "mailto:me@example.com");
        assert_eq!(safe_href("javascript:alert(1)"), "#");
        assert_eq!(safe_href("relative/path"), "#");
    }

    #[test]
    fn test_body_blocks_drop_blank_paragraphs() {
        let blocks = body_blocks("**T**\n\n   \n\n• a\nb");
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].is_heading);
        assert!(blocks[1].is_bullets);
        assert!(blocks[1].lines[0].is_bullet);
        assert!(!blocks[1].lines[1].is_bullet);
    }

    #[test]
    fn test_preview_blocks_show_placeholder() {
        let blocks = preview_blocks("a\n\n\n\nb");
        assert_eq!(blocks.len(), 3);
        assert!(blocks[1].is_blank);
        assert_eq!(blocks[1].text, EMPTY_PARAGRAPH_PLACEHOLDER);
    }

    #[test]
    fn test_image_views_skip_unresolvable() {
        let images = vec![
            ArticleImage {
                id: "1".to_string(),
                url: "javascript:x".to_string(),
                alt: String::new(),
                caption: None,
            },
            ArticleImage {
                id: "2".to_string(),
                url: "cover.png".to_string(),
                alt: "Cover".to_string(),
                caption: Some("A cover".to_string()),
            },
        ];
        let views = image_views(&images, &AssetResolver::default());
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].src, "cover.png");
        assert!(views[0].has_caption);
    }
}
