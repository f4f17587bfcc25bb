//! Image reference resolution against the external object store.
//!
//! Articles store image references as entered by the editor: absolute URLs
//! pointing into the object store, inline `data:` URLs, or object keys
//! relative to a configured base URL.

use url::Url;

/// Errors that can occur while configuring the asset resolver.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Invalid asset base URL: {0}")]
    InvalidBase(String),

    #[error("Only HTTP and HTTPS asset base URLs are allowed")]
    UnsupportedProtocol,
}

/// Turns stored image references into URLs a browser can fetch.
#[derive(Debug, Clone, Default)]
pub struct AssetResolver {
    base: Option<Url>,
}

impl AssetResolver {
    /// Creates a resolver, optionally rooted at `base`.
    ///
    /// A trailing slash is added to the base path so that object keys are
    /// appended to it rather than replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::InvalidBase`] if `base` does not parse.
    /// Returns [`AssetError::UnsupportedProtocol`] for non-HTTP(S) schemes.
    pub fn new(base: Option<&str>) -> Result<Self, AssetError> {
        let Some(raw) = base else {
            return Ok(Self { base: None });
        };

        let mut url = Url::parse(raw).map_err(|e| AssetError::InvalidBase(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AssetError::UnsupportedProtocol);
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self { base: Some(url) })
    }

    /// Resolves a stored reference.
    ///
    /// # Rules
    ///
    /// - `http`, `https` and `data` URLs are returned unchanged
    /// - Absolute URLs with any other scheme resolve to an empty string
    /// - Relative references are joined onto the base URL, or returned as-is
    ///   when no base is configured
    pub fn resolve(&self, reference: &str) -> String {
        let reference = reference.trim();
        if reference.is_empty() {
            return String::new();
        }

        if let Ok(url) = Url::parse(reference) {
            return match url.scheme() {
                "http" | "https" | "data" => reference.to_string(),
                _ => String::new(),
            };
        }

        match &self.base {
            Some(base) => base
                .join(reference.trim_start_matches('/'))
                .map(String::from)
                .unwrap_or_default(),
            None => reference.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls_unchanged() {
        let resolver = AssetResolver::new(Some("https://cdn.example.com/site")).unwrap();
        assert_eq!(
            resolver.resolve("https://other.example.com/a.png"),
            "https://other.example.com/a.png"
        );
        assert_eq!(
            resolver.resolve("data:image/png;base64,AAAA"),
            "data:image/png;base64,AAAA"
        );
    }

    #[test]
    fn test_relative_keys_join_base_path() {
        let resolver = AssetResolver::new(Some("https://cdn.example.com/site")).unwrap();
        assert_eq!(
            resolver.resolve("articles/1/cover.png"),
            "https://cdn.example.com/site/articles/1/cover.png"
        );
        assert_eq!(
            resolver.resolve("/articles/1/cover.png"),
            "https://cdn.example.com/site/articles/1/cover.png"
        );
    }

    #[test]
    fn test_relative_without_base() {
        let resolver = AssetResolver::default();
        assert_eq!(resolver.resolve("/static/a.png"), "/static/a.png");
    }

    #[test]
    fn test_dangerous_schemes_dropped() {
        let resolver = AssetResolver::default();
        assert_eq!(resolver.resolve("javascript:alert(1)"), "");
        assert_eq!(resolver.resolve("file:///etc/passwd"), "");
    }

    #[test]
    fn test_blank_reference() {
        assert_eq!(AssetResolver::default().resolve("   "), "");
    }

    #[test]
    fn test_invalid_base_rejected() {
        assert!(matches!(
            AssetResolver::new(Some("not a url")),
            Err(AssetError::InvalidBase(_))
        ));
        assert!(matches!(
            AssetResolver::new(Some("ftp://files.example.com")),
            Err(AssetError::UnsupportedProtocol)
        ));
    }
}
