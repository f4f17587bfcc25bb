//! URL slug generation for article and category titles.

use regex::Regex;
use std::sync::LazyLock;

/// Anything that is not a lowercase ASCII letter, digit, whitespace or hyphen.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid slug regex"));

/// Runs of whitespace, collapsed into a single hyphen.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Builds a slug from a human-readable title.
///
/// # Rules
///
/// 1. Lowercase the title
/// 2. Drop every character outside `a-z`, `0-9`, whitespace and `-`
/// 3. Replace each whitespace run with a single `-`
/// 4. Trim surrounding whitespace
///
/// Non-ASCII letters are dropped rather than transliterated, so a title made
/// only of them produces an empty slug. Callers fall back to a generated id
/// in that case.
///
/// # Examples
///
/// ```
/// use folio::utils::slug::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("DeFi  in 2024"), "defi-in-2024");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let kept = DISALLOWED.replace_all(&lowered, "");
    let hyphenated = WHITESPACE.replace_all(&kept, "-");
    hyphenated.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_title() {
        assert_eq!(slugify("My First Post"), "my-first-post");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(slugify("What's new? (2024)"), "whats-new-2024");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(slugify("a \t\n b"), "a-b");
    }

    #[test]
    fn test_existing_hyphens_kept() {
        assert_eq!(slugify("state-of-the-art"), "state-of-the-art");
    }

    #[test]
    fn test_leading_and_trailing_spaces_become_hyphens() {
        // Whitespace is replaced before trimming, so edges turn into hyphens.
        assert_eq!(slugify(" padded "), "-padded-");
    }

    #[test]
    fn test_non_ascii_letters_dropped() {
        assert_eq!(slugify("Çok güzel"), "ok-gzel");
    }

    #[test]
    fn test_only_non_ascii_is_empty() {
        assert_eq!(slugify("Ğüş"), "");
    }

    #[test]
    fn test_empty() {
        assert_eq!(slugify(""), "");
    }
}
