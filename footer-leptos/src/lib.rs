//! # footer-leptos
//!
//! Leptos SSR renderer for static site footers.
//!
//! This crate turns a [`types::SiteConfig`] - base URL, optional docs
//! sub-path, sitemap columns, icon, copyright - into plain HTML using
//! [Leptos](https://leptos.dev/) server-side rendering. No reactive runtime,
//! no hydration, no JavaScript: `view! { ... }.to_html()` and nothing else.
//!
//! ## Quick Start
//!
//! ```rust
//! use footer_leptos::{render_footer, types::SiteConfig};
//!
//! let config = SiteConfig {
//!     base_url: "https://example.io/".into(),
//!     copyright: "Copyright © 2026 Example".into(),
//!     ..Default::default()
//! };
//!
//! let html = render_footer(&config, "");
//! assert!(html.contains("nav-footer"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - configuration data model
//! - [`links`] - URL builder for doc/page/asset links
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS for the preview document
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <FooterView config=config language="".to_string() /> };
//! let html: String = view.to_html();
//! ```

#![doc(html_root_url = "https://docs.rs/footer-leptos/0.3.1")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod links;
pub mod styles;
pub mod types;

use components::{FooterDocument, FooterView};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::SiteConfig;

/// Render the footer fragment as HTML.
///
/// This is the main entry point. The result is a bare `<footer>` element for
/// embedding into a host page; it carries no document chrome and no styles.
///
/// `language` is inserted as a path segment into doc/page links; pass `""`
/// for unlocalized output.
///
/// # Example
///
/// ```rust
/// use footer_leptos::{render_footer, types::SiteConfig};
///
/// let config = SiteConfig {
///     base_url: "https://x.io/".into(),
///     ..Default::default()
/// };
///
/// let html = render_footer(&config, "en");
/// assert!(html.contains("<footer"));
/// ```
pub fn render_footer(config: &SiteConfig, language: &str) -> String {
    let view = view! {
        <FooterView config=config.clone() language=language.to_string() />
    };

    view.to_html()
}

/// Render a standalone preview page: the footer plus embedded CSS.
///
/// Returns a complete HTML document including `<!DOCTYPE html>` (Leptos does
/// not emit the doctype itself).
pub fn render_preview(config: &SiteConfig, language: &str) -> String {
    let doc = view! {
        <FooterDocument config=config.clone() language=language.to_string() />
    };

    format!("<!DOCTYPE html>\n{}", doc.to_html())
}
