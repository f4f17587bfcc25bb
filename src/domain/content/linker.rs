//! Entity linker that auto-hyperlinks known names inside prose.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;

/// A named external reference to be linked wherever its name appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntity {
    pub name: String,
    pub url: String,
}

impl LinkEntity {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A run of output text: either untouched or a link to an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Span {
    Plain { text: String },
    Link { text: String, url: String },
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span::Plain { text: text.into() }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Span::Link {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// A region of the input claimed by one entity.
struct Claim<'a> {
    range: Range<usize>,
    entity: &'a LinkEntity,
}

/// Wraps every whole-word, case-insensitive occurrence of each entity name in
/// a [`Span::Link`].
///
/// Entities are processed longest name first (stable for equal lengths), and a
/// region claimed by one entity is never matched again. A shorter name that
/// only occurs inside a longer linked name therefore stays inside that link,
/// while separate occurrences of the shorter name are still linked.
///
/// Link spans display the entity's name, not the matched text. Everything
/// between matches is emitted verbatim as [`Span::Plain`].
///
/// Empty text yields no spans. Entities with an empty name are ignored.
///
/// # Examples
///
/// ```
/// use folio::domain::content::{LinkEntity, Span, linkify};
///
/// let spans = linkify(
///     "Jupiter is great",
///     &[LinkEntity::new("Jupiter", "https://jupiter.ag")],
/// );
/// assert_eq!(
///     spans,
///     vec![
///         Span::link("Jupiter", "https://jupiter.ag"),
///         Span::plain(" is great"),
///     ]
/// );
/// ```
pub fn linkify(text: &str, entities: &[LinkEntity]) -> Vec<Span> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut ordered: Vec<&LinkEntity> = entities.iter().filter(|e| !e.name.is_empty()).collect();
    ordered.sort_by_key(|e| std::cmp::Reverse(e.name.chars().count()));

    // Claims are disjoint and keyed by start offset.
    let mut claims: BTreeMap<usize, Claim> = BTreeMap::new();
    for entity in ordered {
        let Some(pattern) = name_pattern(&entity.name) else {
            continue;
        };
        for range in whole_word_matches(&pattern, text) {
            if is_claimed(&claims, &range) {
                continue;
            }
            claims.insert(range.start, Claim { range, entity });
        }
    }

    let mut spans = Vec::with_capacity(claims.len() * 2 + 1);
    let mut cursor = 0;
    for claim in claims.into_values() {
        if claim.range.start > cursor {
            spans.push(Span::plain(&text[cursor..claim.range.start]));
        }
        spans.push(Span::link(&claim.entity.name, &claim.entity.url));
        cursor = claim.range.end;
    }
    if cursor < text.len() {
        spans.push(Span::plain(&text[cursor..]));
    }

    spans
}

/// Case-insensitive literal pattern for an entity name.
fn name_pattern(name: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(name))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Finds every occurrence of `pattern` bounded by non-word characters or the
/// string edges, including occurrences that start inside a rejected candidate.
fn whole_word_matches(pattern: &Regex, text: &str) -> Vec<Range<usize>> {
    let mut found = Vec::new();
    let mut from = 0;

    while from <= text.len() {
        let Some(m) = pattern.find_at(text, from) else {
            break;
        };
        if m.is_empty() {
            break;
        }

        if is_boundary_before(text, m.start()) && is_boundary_after(text, m.end()) {
            found.push(m.range());
            from = m.end();
        } else {
            // Retry one character further in; a later overlapping start may still qualify.
            let step = text[m.start()..].chars().next().map_or(1, char::len_utf8);
            from = m.start() + step;
        }
    }

    found
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_boundary_before(text: &str, at: usize) -> bool {
    text[..at].chars().next_back().is_none_or(|c| !is_word_char(c))
}

fn is_boundary_after(text: &str, at: usize) -> bool {
    text[at..].chars().next().is_none_or(|c| !is_word_char(c))
}

/// Whether `range` overlaps an existing claim.
///
/// Only the last claim starting before `range.end` can overlap, since claims
/// never overlap each other.
fn is_claimed(claims: &BTreeMap<usize, Claim>, range: &Range<usize>) -> bool {
    claims
        .range(..range.end)
        .next_back()
        .is_some_and(|(_, c)| c.range.end > range.start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(name: &str, url: &str) -> LinkEntity {
        LinkEntity::new(name, url)
    }

    #[test]
    fn test_links_leading_name() {
        assert_eq!(
            linkify(
                "Jupiter is great",
                &[entity("Jupiter", "https://jupiter.ag")]
            ),
            vec![
                Span::link("Jupiter", "https://jupiter.ag"),
                Span::plain(" is great"),
            ]
        );
    }

    #[test]
    fn test_short_and_long_names_as_separate_words() {
        assert_eq!(
            linkify(
                "Jup and Jupiter",
                &[entity("Jup", "u1"), entity("Jupiter", "u2")]
            ),
            vec![
                Span::link("Jup", "u1"),
                Span::plain(" and "),
                Span::link("Jupiter", "u2"),
            ]
        );
    }

    #[test]
    fn test_substring_inside_word_is_not_linked() {
        assert_eq!(
            linkify("superJupiterfan", &[entity("Jupiter", "u")]),
            vec![Span::plain("superJupiterfan")]
        );
    }

    #[test]
    fn test_longer_name_claims_region_first() {
        assert_eq!(
            linkify(
                "Try Jupiter Exchange today",
                &[entity("Jupiter", "short"), entity("Jupiter Exchange", "long")]
            ),
            vec![
                Span::plain("Try "),
                Span::link("Jupiter Exchange", "long"),
                Span::plain(" today"),
            ]
        );
    }

    #[test]
    fn test_case_insensitive_and_displays_entity_name() {
        assert_eq!(
            linkify("i love METEORA.", &[entity("Meteora", "m")]),
            vec![
                Span::plain("i love "),
                Span::link("Meteora", "m"),
                Span::plain("."),
            ]
        );
    }

    #[test]
    fn test_every_occurrence_is_linked() {
        assert_eq!(
            linkify("Kyber, then Kyber again", &[entity("Kyber", "k")]),
            vec![
                Span::link("Kyber", "k"),
                Span::plain(", then "),
                Span::link("Kyber", "k"),
                Span::plain(" again"),
            ]
        );
    }

    #[test]
    fn test_adjacent_occurrences() {
        assert_eq!(
            linkify("Fluid Fluid", &[entity("Fluid", "f")]),
            vec![
                Span::link("Fluid", "f"),
                Span::plain(" "),
                Span::link("Fluid", "f"),
            ]
        );
    }

    #[test]
    fn test_duplicate_names_first_url_wins() {
        assert_eq!(
            linkify(
                "Fluid and fluid",
                &[entity("Fluid", "first"), entity("fluid", "second")]
            ),
            vec![
                Span::link("Fluid", "first"),
                Span::plain(" and "),
                Span::link("Fluid", "first"),
            ]
        );
    }

    #[test]
    fn test_equal_length_keeps_input_order() {
        assert_eq!(
            linkify(
                "New York Bay",
                &[entity("New York", "1"), entity("York Bay", "2")]
            ),
            vec![Span::link("New York", "1"), Span::plain(" Bay")]
        );
        assert_eq!(
            linkify(
                "New York Bay",
                &[entity("York Bay", "2"), entity("New York", "1")]
            ),
            vec![Span::plain("New "), Span::link("York Bay", "2")]
        );
    }

    #[test]
    fn test_names_with_punctuation() {
        assert_eq!(
            linkify("I write C++ daily", &[entity("C++", "cpp")]),
            vec![
                Span::plain("I write "),
                Span::link("C++", "cpp"),
                Span::plain(" daily"),
            ]
        );
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        assert_eq!(
            linkify("a.b and axb", &[entity("a.b", "dot")]),
            vec![Span::link("a.b", "dot"), Span::plain(" and axb")]
        );
    }

    #[test]
    fn test_retries_inside_rejected_candidate() {
        // The candidate at 1 is preceded by 'b'; the overlapping one at 3 is bounded.
        assert_eq!(
            linkify("ba-a-a", &[entity("a-a", "x")]),
            vec![Span::plain("ba-"), Span::link("a-a", "x")]
        );
    }

    #[test]
    fn test_underscore_counts_as_word_char() {
        assert_eq!(
            linkify("my_Jupiter", &[entity("Jupiter", "u")]),
            vec![Span::plain("my_Jupiter")]
        );
    }

    #[test]
    fn test_unicode_neighbours() {
        assert_eq!(
            linkify("çJupiter", &[entity("Jupiter", "u")]),
            vec![Span::plain("çJupiter")]
        );
        assert_eq!(
            linkify("“Jupiter”", &[entity("Jupiter", "u")]),
            vec![
                Span::plain("“"),
                Span::link("Jupiter", "u"),
                Span::plain("”"),
            ]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(linkify("", &[entity("Jupiter", "u")]).is_empty());
    }

    #[test]
    fn test_no_entities_yields_single_plain_span() {
        assert_eq!(
            linkify("nothing to see", &[]),
            vec![Span::plain("nothing to see")]
        );
    }

    #[test]
    fn test_empty_name_is_ignored() {
        assert_eq!(linkify("abc", &[entity("", "u")]), vec![Span::plain("abc")]);
    }

    #[test]
    fn test_entities_are_not_mutated_and_output_is_stable() {
        let entities = vec![entity("Jup", "u1"), entity("Jupiter", "u2")];
        let before = entities.clone();
        let first = linkify("Jup and Jupiter", &entities);
        let second = linkify("Jup and Jupiter", &entities);
        assert_eq!(first, second);
        assert_eq!(entities, before);
    }

    #[test]
    fn test_plain_spans_preserve_unmatched_text() {
        let text = "Previously at InstaDapp,  Fluid\tand Kyber.";
        let spans = linkify(
            text,
            &[
                entity("InstaDapp", "a"),
                entity("Fluid", "b"),
                entity("Kyber", "c"),
            ],
        );
        let rebuilt: String = spans
            .iter()
            .map(|s| match s {
                Span::Plain { text } | Span::Link { text, .. } => text.as_str(),
            })
            .collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_many_occurrences_are_all_linked() {
        let text = "a ".repeat(100_000);
        let spans = linkify(&text, &[entity("a", "u")]);

        assert_eq!(spans.len(), 200_000);
        assert_eq!(spans[0], Span::link("a", "u"));
        assert_eq!(spans[1], Span::plain(" "));
        assert_eq!(spans[199_999], Span::plain(" "));
    }

    #[test]
    fn test_shorter_name_inside_claimed_region_is_skipped() {
        assert_eq!(
            linkify(
                "Jupiter Exchange and Exchange",
                &[entity("Exchange", "short"), entity("Jupiter Exchange", "long")]
            ),
            vec![
                Span::link("Jupiter Exchange", "long"),
                Span::plain(" and "),
                Span::link("Exchange", "short"),
            ]
        );
    }
}
