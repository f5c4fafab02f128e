//! Leptos UI components for rendering the footer.
//!
//! Each component is a plain `#[component]` function taking owned props;
//! there is no shared context and no reactive state.
//!
//! # Component Hierarchy
//!
//! ```text
//! FooterDocument (preview page only)
//! └── FooterView
//!     ├── BrandLink
//!     └── SitemapColumn (per configured column)
//! ```
//!
//! Components are typically used via [`crate::render_footer`] /
//! [`crate::render_preview`], but can be composed directly for custom
//! layouts.

mod document;
mod footer;

pub use document::FooterDocument;
pub use footer::{BrandLink, FooterView, SitemapColumn};
