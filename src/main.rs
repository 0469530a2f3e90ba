//! Blog Index - builds a JSON manifest of markdown posts
//!
//! Scans the content directory, titles every post from its first heading (or
//! its filename), and writes the list newest first.

mod core;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::{config::IndexConfig, manifest::Manifest};

#[derive(Parser, Debug)]
#[command(name = "blog-index", version, about)]
struct Args {
    /// JSON config file; missing fields use the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Project root that manifest paths are relative to
    #[arg(long)]
    root: Option<PathBuf>,

    /// Content directory, relative to the root
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Manifest file, relative to the root
    #[arg(long)]
    output: Option<PathBuf>,

    /// Extension of indexed files, without the dot
    #[arg(long)]
    extension: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Merge flags over the config file over the defaults
    fn into_config(self) -> Result<IndexConfig> {
        let mut config = match &self.config {
            Some(path) => IndexConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => IndexConfig::default(),
        };

        if let Some(root) = self.root {
            config.root = root;
        }
        if let Some(content_dir) = self.content_dir {
            config.content_dir = content_dir;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(extension) = self.extension {
            config.extension = extension.trim_start_matches('.').to_string();
        }
        Ok(config)
    }
}

/// Build the manifest and replace the output file, returning the post count
fn run(config: &IndexConfig) -> Result<usize> {
    let manifest = Manifest::build(config).with_context(|| {
        format!("Failed to index {}", config.content_path().display())
    })?;
    let written = manifest
        .write(&config.output_path())
        .with_context(|| format!("Failed to write {}", config.output_path().display()))?;
    Ok(written)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout only carries the summary
    let level = if args.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(level)
        .init();

    let config = args.into_config()?;
    tracing::debug!("Using config: {:?}", config);

    let count = run(&config)?;
    println!("Wrote {} posts to {}", count, config.display_output());
    Ok(())
}
