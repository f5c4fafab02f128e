//! URL construction for footer links.
//!
//! Joins `base_url`, an optional docs sub-path, an optional language segment,
//! and a document identifier into a final path string. Pure string
//! concatenation: deterministic, no I/O, no failure paths.
//!
//! `base_url` is trusted to carry its own trailing separator. A value without
//! one produces a run-together string rather than an error; that contract
//! belongs to the caller, not the builder.

use crate::types::SiteConfig;

/// Build a documentation link.
///
/// Concatenates, in order: `base_url`; the docs sub-path plus `/` when
/// configured and non-empty; the language plus `/` when non-empty; then `doc`.
/// Omitted optional segments contribute nothing, not even a stray separator.
///
/// ```rust
/// use footer_leptos::{links::doc_url, types::SiteConfig};
///
/// let config = SiteConfig {
///     base_url: "https://x.io/".into(),
///     docs_url: Some("docs".into()),
///     ..Default::default()
/// };
/// assert_eq!(doc_url(&config, "install", "en"), "https://x.io/docs/en/install");
/// ```
pub fn doc_url(config: &SiteConfig, doc: &str, language: &str) -> String {
    let mut url = config.base_url.clone();
    match config.docs_url.as_deref() {
        Some(docs) if !docs.is_empty() => {
            url.push_str(docs);
            url.push('/');
        }
        _ => {}
    }
    if !language.is_empty() {
        url.push_str(language);
        url.push('/');
    }
    url.push_str(doc);
    url
}

/// Build a plain page link.
///
/// Like [`doc_url`] but never inserts the docs sub-path, even when one is
/// configured.
pub fn page_url(config: &SiteConfig, doc: &str, language: &str) -> String {
    let mut url = config.base_url.clone();
    if !language.is_empty() {
        url.push_str(language);
        url.push('/');
    }
    url.push_str(doc);
    url
}

/// Resolve a site-relative asset path (e.g. the footer icon) against `base_url`.
pub fn asset_url(config: &SiteConfig, asset: &str) -> String {
    format!("{}{}", config.base_url, asset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(docs_url: Option<&str>) -> SiteConfig {
        SiteConfig {
            base_url: "https://x.io/".into(),
            docs_url: docs_url.map(str::to_string),
            ..Default::default()
        }
    }

    /// Separators after the scheme's `//`.
    fn has_double_separator(url: &str) -> bool {
        let path = url.strip_prefix("https://").unwrap_or(url);
        path.contains("//")
    }

    #[test]
    fn doc_url_without_docs_or_language_is_base_plus_doc() {
        let config = config(None);
        assert_eq!(doc_url(&config, "intro", ""), "https://x.io/intro");
    }

    #[test]
    fn doc_url_with_docs_and_language() {
        let config = config(Some("docs"));
        assert_eq!(doc_url(&config, "install", "en"), "https://x.io/docs/en/install");
    }

    #[test]
    fn empty_docs_url_contributes_nothing() {
        // Some("") behaves like None: no placeholder, no stray separator.
        let config = config(Some(""));
        assert_eq!(doc_url(&config, "intro", ""), "https://x.io/intro");
        assert!(!has_double_separator(&doc_url(&config, "intro", "")));
    }

    #[test]
    fn omitted_language_inserts_no_empty_segment() {
        let config = config(Some("docs"));
        let url = doc_url(&config, "intro", "");
        assert_eq!(url, "https://x.io/docs/intro");
        assert!(!has_double_separator(&url));
    }

    #[test]
    fn page_url_never_includes_docs_segment() {
        let config = config(Some("docs"));
        assert_eq!(page_url(&config, "install", ""), "https://x.io/install");
        assert_eq!(page_url(&config, "install", "en"), "https://x.io/en/install");
        assert!(!page_url(&config, "install", "en").contains("docs"));
    }

    #[test]
    fn builders_are_pure() {
        let config = config(Some("docs"));
        assert_eq!(
            doc_url(&config, "install", "en"),
            doc_url(&config, "install", "en")
        );
        assert_eq!(
            page_url(&config, "install", "en"),
            page_url(&config, "install", "en")
        );
        // Inputs are untouched.
        assert_eq!(config.base_url, "https://x.io/");
        assert_eq!(config.docs_url.as_deref(), Some("docs"));
    }

    #[test]
    fn base_url_without_trailing_separator_passes_through() {
        // Caller contract violation: odd output, but no panic and no repair.
        let config = SiteConfig {
            base_url: "https://x.io".into(),
            ..Default::default()
        };
        assert_eq!(page_url(&config, "install", ""), "https://x.ioinstall");
    }

    #[test]
    fn asset_url_concatenates_verbatim() {
        let config = config(None);
        assert_eq!(
            asset_url(&config, "img/footer-icon.png"),
            "https://x.io/img/footer-icon.png"
        );
    }
}
