//! CSS for the footer preview document.
//!
//! Only the preview page embeds this; [`crate::render_footer`] emits a bare
//! fragment and leaves styling to the host site.
//!
//! # Customization
//!
//! ```rust
//! use footer_leptos::styles::FOOTER_CSS;
//!
//! let my_css = ".nav-footer { background: #1a1a2e; }";
//! let combined = format!("{}\n{}", FOOTER_CSS, my_css);
//! ```

/// Complete CSS for the footer preview - dark theme, monospace typography.
pub const FOOTER_CSS: &str = r#"
:root {
    --bg-dark: #0a0a0a;
    --bg-mid: #141414;
    --text-bright: #a8a8a8;
    --text-dim: #707070;
    --border-subtle: rgba(168, 168, 168, 0.1);
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --container-max: 1000px;
    --accent-blue: #4f81e1;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--bg-dark);
    color: var(--text-bright);
    font-family: var(--font-mono);
    font-size: 14px;
}

.nav-footer {
    background: var(--bg-mid);
    border-top: 1px solid var(--border-subtle);
    padding: 2rem 1rem;
}

.sitemap {
    display: flex;
    flex-wrap: wrap;
    gap: 3rem;
    max-width: var(--container-max);
    margin: 0 auto;
}

.nav-home img {
    display: block;
}

.sitemap-column h5 {
    margin: 0 0 0.75rem;
    color: var(--text-dim);
    text-transform: uppercase;
    letter-spacing: 0.08em;
    font-size: 12px;
}

.footer-link {
    display: block;
    color: var(--text-bright);
    text-decoration: none;
    padding: 0.2rem 0;
}

.footer-link:hover {
    color: var(--accent-blue);
}

.copyright {
    max-width: var(--container-max);
    margin: 1.5rem auto 0;
    color: var(--text-dim);
    font-size: 12px;
}
"#;
