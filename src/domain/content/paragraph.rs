//! Paragraph renderer for article and bio bodies.

use serde::Serialize;

/// Separator between paragraphs in a stored body.
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Marker wrapping a heading paragraph on both sides.
const HEADING_MARKER: &str = "**";

/// Marker starting a bullet line.
const BULLET_MARKER: char = '•';

/// One classified paragraph of a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A `**...**` paragraph with the markers stripped.
    Heading { text: String },
    /// A paragraph containing the bullet marker, split into lines.
    BulletBlock { lines: Vec<BulletLine> },
    /// Any other paragraph, kept verbatim.
    PlainParagraph { text: String },
}

/// A single line inside a [`Block::BulletBlock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BulletLine {
    /// A line starting with `•`; the marker and surrounding whitespace are removed.
    Bullet { text: String },
    /// A line without the marker, kept verbatim.
    Plain { text: String },
}

/// Splits `body` on blank lines and classifies every segment.
///
/// Classification order per segment:
///
/// 1. Trimmed text starts and ends with `**` and is at least four bytes long
///    → [`Block::Heading`] with the outer markers removed.
/// 2. Segment contains `•` anywhere → [`Block::BulletBlock`].
/// 3. Otherwise → [`Block::PlainParagraph`] with the untouched segment.
///
/// An empty body yields a single empty plain paragraph. Segments are returned
/// in their original order and never merged.
///
/// # Examples
///
/// ```
/// use folio::domain::content::{Block, render};
///
/// let blocks = render("**Intro**\n\nHello");
/// assert_eq!(blocks[0], Block::Heading { text: "Intro".into() });
/// assert_eq!(blocks[1], Block::PlainParagraph { text: "Hello".into() });
/// ```
pub fn render(body: &str) -> Vec<Block> {
    body.split(PARAGRAPH_SEPARATOR).map(classify).collect()
}

fn classify(segment: &str) -> Block {
    let trimmed = segment.trim();

    if trimmed.len() >= 2 * HEADING_MARKER.len()
        && trimmed.starts_with(HEADING_MARKER)
        && trimmed.ends_with(HEADING_MARKER)
    {
        let inner = &trimmed[HEADING_MARKER.len()..trimmed.len() - HEADING_MARKER.len()];
        return Block::Heading {
            text: inner.to_string(),
        };
    }

    if segment.contains(BULLET_MARKER) {
        let lines = segment.split('\n').map(classify_line).collect();
        return Block::BulletBlock { lines };
    }

    Block::PlainParagraph {
        text: segment.to_string(),
    }
}

fn classify_line(line: &str) -> BulletLine {
    match line.trim().strip_prefix(BULLET_MARKER) {
        Some(rest) => BulletLine::Bullet {
            text: rest.trim().to_string(),
        },
        None => BulletLine::Plain {
            text: line.to_string(),
        },
    }
}

impl Block {
    /// Returns `true` for a plain paragraph that holds no visible text.
    ///
    /// Edit previews show a placeholder for these.
    pub fn is_blank(&self) -> bool {
        matches!(self, Block::PlainParagraph { text } if text.trim().is_empty())
    }
}
