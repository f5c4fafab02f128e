//! Site configuration loading.
//!
//! Loads a `site.toml` into the [`SiteConfig`] consumed by the renderer.

use std::path::{Path, PathBuf};

use footer_leptos::types::SiteConfig;
use thiserror::Error;
use tracing::warn;

/// Errors from reading or parsing a site configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or is missing required fields.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Load a site configuration from `path`.
///
/// A footer without `base_url` cannot produce links, so unlike lenient tool
/// configs, read and parse failures here are hard errors rather than
/// warn-and-default.
pub fn load(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: SiteConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    // The builder concatenates verbatim; surface the misconfiguration here
    // without repairing the value.
    if !config.base_url.ends_with('/') {
        warn!(
            base_url = %config.base_url,
            "base_url has no trailing separator; generated links will run together"
        );
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("site.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        write!(file, "{}", content).expect("write config");
        path
    }

    #[test]
    fn loads_full_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(
            &temp,
            r#"
base_url = "https://x.io/"
docs_url = "docs"
title = "Example"
footer_icon = "img/footer-icon.png"
copyright = "Copyright (c) 2026 Example"

[[columns]]
heading = "Docs"

[[columns.links]]
label = "Install"
target = { doc = "install" }

[[columns.links]]
label = "GitHub"
target = { external = "https://github.com/sitefoot/sitefoot" }
"#,
        );

        let config = load(&path).expect("load config");
        assert_eq!(config.base_url, "https://x.io/");
        assert_eq!(config.docs_url.as_deref(), Some("docs"));
        assert_eq!(config.footer_icon.as_deref(), Some("img/footer-icon.png"));
        assert_eq!(config.columns.len(), 1);
        assert_eq!(config.columns[0].links.len(), 2);
        assert!(config.columns[0].links[1].target.is_external());
    }

    #[test]
    fn loads_minimal_config_with_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "base_url = \"https://x.io/\"\n");

        let config = load(&path).expect("load config");
        assert_eq!(config.base_url, "https://x.io/");
        assert!(config.docs_url.is_none());
        assert!(config.columns.is_empty());
        assert!(config.title.is_empty());
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = load(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn missing_base_url_is_parse_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "title = \"Example\"\n");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "base_url = \n");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
