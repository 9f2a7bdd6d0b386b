//! ldpost - publish schema.org BlogPosting structured data into blog pages.

mod check;
mod cli;
mod config;
mod content;
mod document;
mod inject;
mod print;
mod seo;
mod utils;

use anyhow::{Context, Result, bail};
use check::check_dir;
use clap::Parser;
use cli::{Cli, Commands};
use config::SeoConfig;
use content::PostIndex;
use inject::inject_pages;
use print::render_post;
use utils::date::SystemClock;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Inject { strict, .. } => {
            let index = load_index(&config)?;
            inject_pages(&config, &index, *strict).map(|_| ())
        }
        Commands::Print { id } => {
            let index = load_index(&config)?;
            println!("{}", render_post(&config, &index, id, SystemClock)?);
            Ok(())
        }
        Commands::Check { dir } => {
            let dir = dir.as_deref().unwrap_or(config.output_dir());
            let report = check_dir(dir)?;
            if !report.is_clean() {
                bail!("{} pages need attention", report.problems.len());
            }
            Ok(())
        }
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file falls back to the built-in defaults.
fn load_config(cli: &Cli) -> Result<SeoConfig> {
    let config_path = SeoConfig::config_file(cli);

    let mut config = if config_path.exists() {
        SeoConfig::from_path(&config_path)?
    } else {
        if cli.is_inject() {
            log!("warn"; "{} not found, using defaults", config_path.display());
        }
        SeoConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

fn load_index(config: &SeoConfig) -> Result<PostIndex> {
    PostIndex::from_path(&config.build.content)
        .with_context(|| format!("failed to load {}", config.build.content.display()))
}
