//! Text transforms that turn stored plain-text bodies into display structure.
//!
//! Both transforms are pure functions over their arguments:
//!
//! - [`render`] splits a body on blank lines and classifies each segment as a
//!   heading, a bullet block, or a plain paragraph.
//! - [`linkify`] wraps whole-word, case-insensitive occurrences of named
//!   entities in link spans, longest names first.
//!
//! Neither function fails. Output is recomputed from the inputs on every call,
//! so they can run concurrently from any number of handlers.

pub mod linker;
pub mod paragraph;

pub use linker::{LinkEntity, Span, linkify};
pub use paragraph::{Block, BulletLine, render};
