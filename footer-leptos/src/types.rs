//! Site configuration consumed by the footer renderer.
//!
//! These types define the boundary between a site's configuration file and
//! the rendered footer. They're designed to be:
//!
//! - **Serializable** - loaded from TOML/JSON via serde
//! - **Clone-friendly** - components take owned values, no borrowing issues
//! - **Default-able** - build partial configs with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use footer_leptos::types::{SiteConfig, FooterColumn, FooterLink, LinkTarget};
//!
//! let config = SiteConfig {
//!     base_url: "https://x.io/".into(),
//!     docs_url: Some("docs".into()),
//!     title: "Example".into(),
//!     copyright: "Copyright © 2026 Example".into(),
//!     columns: vec![FooterColumn {
//!         heading: "Docs".into(),
//!         links: vec![FooterLink {
//!             label: "Install".into(),
//!             target: LinkTarget::Doc("install".into()),
//!         }],
//!     }],
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

use crate::links;

/// Site-wide configuration for the footer.
///
/// Owned entirely by the caller and read-only to the renderer. The only
/// required field is `base_url`; everything else defaults to empty.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Root path all generated links are relative to.
    ///
    /// Assumed to already end with a path separator; the builder concatenates
    /// it verbatim and never normalizes.
    pub base_url: String,
    /// Optional sub-path segment prefixing documentation links.
    ///
    /// Stored without a trailing separator; the builder appends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
    /// Site title, used as alt text for the footer icon.
    #[serde(default)]
    pub title: String,
    /// Icon path relative to `base_url`, shown in the brand link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_icon: Option<String>,
    /// Copyright notice, rendered verbatim.
    #[serde(default)]
    pub copyright: String,
    /// Sitemap columns, rendered left to right.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<FooterColumn>,
}

/// One column of the sitemap: a heading and its links.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FooterColumn {
    /// Column heading.
    pub heading: String,
    /// Links in display order.
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

/// A single footer link: display label plus where it points.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FooterLink {
    /// Display label.
    pub label: String,
    /// Link destination.
    pub target: LinkTarget,
}

/// Destination of a footer link.
///
/// Doc and page identifiers are resolved through the URL builder in
/// [`crate::links`]; external hrefs pass through untouched.
///
/// # Example
///
/// ```rust
/// use footer_leptos::types::{LinkTarget, SiteConfig};
///
/// let config = SiteConfig {
///     base_url: "https://x.io/".into(),
///     docs_url: Some("docs".into()),
///     ..Default::default()
/// };
///
/// let target = LinkTarget::Doc("install".into());
/// assert_eq!(target.href(&config, "en"), "https://x.io/docs/en/install");
///
/// let target = LinkTarget::External("https://github.com".into());
/// assert_eq!(target.href(&config, "en"), "https://github.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    /// Documentation page identifier, resolved via [`links::doc_url`].
    Doc(String),
    /// Plain page identifier, resolved via [`links::page_url`].
    Page(String),
    /// Verbatim href, typically an absolute external URL.
    External(String),
}

impl LinkTarget {
    /// Resolve this target into an href for the given config and language.
    pub fn href(&self, config: &SiteConfig, language: &str) -> String {
        match self {
            LinkTarget::Doc(doc) => links::doc_url(config, doc, language),
            LinkTarget::Page(page) => links::page_url(config, page, language),
            LinkTarget::External(href) => href.clone(),
        }
    }

    /// True for targets that leave the site.
    pub fn is_external(&self) -> bool {
        matches!(self, LinkTarget::External(_))
    }
}
