//! Static export of the Manz landing page.
//!
//! ```bash
//! manz-render                         # dist/index.html, inline CSS
//! manz-render -o public/index.html --external-styles
//! manz-render --dump-content | jq '.[].title'
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use manz_page::config::ManzConfig;
use manz_page::content::ContentFeed;
use manz_page::export::export_page;

#[derive(Parser, Debug)]
#[command(name = "manz-render")]
#[command(about = "Render the Manz landing page to static HTML")]
#[command(version)]
struct Args {
    /// HTML file to write (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (default: ./manz.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document title (overrides config)
    #[arg(long)]
    title: Option<String>,

    /// Write styles.css next to the page instead of inlining it
    #[arg(long)]
    external_styles: bool,

    /// Print the built-in articles as JSON and exit
    #[arg(long)]
    dump_content: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries --dump-content output, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    if args.dump_content {
        let json = serde_json::to_string_pretty(&ContentFeed::builtin())
            .context("serializing built-in content")?;
        println!("{json}");
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => ManzConfig::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ManzConfig::discover(&std::env::current_dir().context("resolving working directory")?),
    };
    debug!(?config, "resolved config");

    if let Some(output) = args.output {
        config.export.output = output;
    }
    if let Some(title) = args.title {
        config.export.title = title;
    }
    if args.external_styles {
        config.export.external_styles = true;
    }

    let report = export_page(&config.export).context("exporting page")?;
    info!(
        "done: {}{}",
        report.html_path.display(),
        report
            .stylesheet_path
            .map(|p| format!(" + {}", p.display()))
            .unwrap_or_default()
    );

    Ok(())
}
