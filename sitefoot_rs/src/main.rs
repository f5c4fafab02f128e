//! sitefoot CLI: render a site footer from `site.toml`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use footer_leptos::{render_footer, render_preview};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "sitefoot")]
#[command(about = "Render a static site footer from a site configuration")]
#[command(version)]
struct Args {
    /// Site configuration file
    #[arg(long, default_value = "site.toml")]
    config: PathBuf,

    /// Output HTML file
    #[arg(short, long, default_value = "footer.html")]
    output: PathBuf,

    /// Language code inserted as a path segment in generated links
    #[arg(long, default_value = "")]
    language: String,

    /// Render a standalone preview page instead of a bare fragment
    #[arg(long)]
    preview: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let site = sitefoot::config::load(&args.config)?;

    let html = if args.preview {
        render_preview(&site, &args.language)
    } else {
        render_footer(&site, &args.language)
    };

    std::fs::write(&args.output, &html)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        "footer written to {} ({} bytes)",
        args.output.display(),
        html.len()
    );

    Ok(())
}
