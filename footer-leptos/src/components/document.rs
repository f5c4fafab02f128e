//! Standalone preview page wrapping the footer fragment.

use leptos::prelude::*;

use super::FooterView;
use crate::styles::FOOTER_CSS;
use crate::types::SiteConfig;

/// A complete HTML page embedding the footer and its CSS.
///
/// Meant for previewing a configuration in a browser; production sites embed
/// the fragment from [`crate::render_footer`] instead.
#[component]
pub fn FooterDocument(config: SiteConfig, language: String) -> impl IntoView {
    let title = config.title.clone();

    view! {
        <html>
            <head>
                <meta charset="UTF-8" />
                <title>{title}</title>
                <style>{FOOTER_CSS}</style>
            </head>
            <body>
                <FooterView config=config language=language />
            </body>
        </html>
    }
}
