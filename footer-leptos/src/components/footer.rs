//! The footer fragment: brand link, sitemap columns, copyright.

use leptos::prelude::*;

use crate::links;
use crate::types::{FooterColumn, SiteConfig};

/// The complete footer fragment.
#[component]
pub fn FooterView(config: SiteConfig, language: String) -> impl IntoView {
    let brand_config = config.clone();
    let columns = config.columns.clone();
    let copyright = config.copyright.clone();

    view! {
        <footer class="nav-footer" id="footer">
            <section class="sitemap">
                <BrandLink config=brand_config />
                {columns.into_iter().map(|column| {
                    view! {
                        <SitemapColumn
                            column=column
                            config=config.clone()
                            language=language.clone()
                        />
                    }
                }).collect::<Vec<_>>()}
            </section>
            <section class="copyright">{copyright}</section>
        </footer>
    }
}

/// Home link with the optional footer icon.
///
/// Renders an empty anchor when no icon is configured, matching the
/// no-placeholder rule for absent optionals.
#[component]
pub fn BrandLink(config: SiteConfig) -> impl IntoView {
    let home = config.base_url.clone();
    let icon = config
        .footer_icon
        .as_ref()
        .map(|icon| (links::asset_url(&config, icon), config.title.clone()));

    view! {
        <a href=home class="nav-home">
            {icon.map(|(src, alt)| view! {
                <img src=src alt=alt width="66" height="58" />
            })}
        </a>
    }
}

/// One sitemap column: heading plus its resolved links.
#[component]
pub fn SitemapColumn(column: FooterColumn, config: SiteConfig, language: String) -> impl IntoView {
    view! {
        <div class="sitemap-column">
            <h5>{column.heading}</h5>
            {column.links.into_iter().map(|link| {
                let href = link.target.href(&config, &language);
                if link.target.is_external() {
                    view! {
                        <a href=href target="_blank" class="footer-link">{link.label}</a>
                    }
                    .into_any()
                } else {
                    view! {
                        <a href=href class="footer-link">{link.label}</a>
                    }
                    .into_any()
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
