//! # sitefoot
//!
//! Static site footer generator. Loads a `site.toml` configuration and
//! renders it to HTML via [`footer_leptos`].
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let config = sitefoot::config::load(Path::new("site.toml"))?;
//! let html = footer_leptos::render_footer(&config, "en");
//! # Ok::<(), sitefoot::config::ConfigError>(())
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! sitefoot                          # site.toml -> footer.html
//! sitefoot --language en --preview  # localized standalone preview page
//! ```

pub mod config;
