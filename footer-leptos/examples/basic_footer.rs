//! Basic footer generation example.
//!
//! Run with: `cargo run --example basic_footer`

use footer_leptos::render_preview;
use footer_leptos::types::{FooterColumn, FooterLink, LinkTarget, SiteConfig};

fn main() {
    let config = SiteConfig {
        base_url: "https://example.io/".into(),
        docs_url: Some("docs".into()),
        title: "Example".into(),
        copyright: "Copyright © 2026 Example Project".into(),
        columns: vec![FooterColumn {
            heading: "Docs".into(),
            links: vec![
                FooterLink {
                    label: "Getting Started".into(),
                    target: LinkTarget::Doc("getting-started".into()),
                },
                FooterLink {
                    label: "GitHub".into(),
                    target: LinkTarget::External("https://github.com/sitefoot/sitefoot".into()),
                },
            ],
        }],
        ..Default::default()
    };

    // Standalone page with embedded CSS - open it in a browser.
    let html = render_preview(&config, "en");

    let output_path = "footer_preview.html";
    std::fs::write(output_path, &html).expect("Failed to write footer");

    println!("Footer written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
