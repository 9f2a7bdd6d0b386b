//! Configuration management for `ldpost.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                          |
//! |---------------|--------------------------------------------------|
//! | `[publisher]` | Organization credited as author and publisher    |
//! | `[posting]`   | Keywords, word count, article body placeholder   |
//! | `[build]`     | Content index, pages directory, base URL         |
//!
//! # Example
//!
//! ```toml
//! [publisher]
//! name = "Idea Manifest"
//! url = "https://www.ideamanifest.com"
//! logo = "https://www.ideamanifest.com/logo.png"
//!
//! [posting]
//! keywords = ["software development", "consulting"]
//!
//! [build]
//! content = "posts.toml"
//! pages = "public/blog"
//! base_url = "https://www.ideamanifest.com"
//! ```

mod build;
pub mod defaults;
mod error;
mod posting;
mod publisher;

pub use build::BuildConfig;
pub use error::ConfigError;
pub use posting::PostingConfig;
pub use publisher::PublisherConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing ldpost.toml.
///
/// Immutable once loaded; the publisher only ever borrows it.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SeoConfig {
    /// Organization identity
    #[serde(default)]
    pub publisher: PublisherConfig,

    /// Shared descriptor values
    #[serde(default)]
    pub posting: PostingConfig,

    /// Paths and URLs
    #[serde(default)]
    pub build: BuildConfig,
}

impl SeoConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SeoConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Config file named on the command line, relative to `--root`.
    pub fn config_file(cli: &Cli) -> PathBuf {
        cli.root.as_deref().unwrap_or(Path::new("./")).join(&cli.config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Directory injected pages are written to.
    pub fn output_dir(&self) -> &Path {
        self.build.output.as_deref().unwrap_or(&self.build.pages)
    }

    /// Absolute page URL for a site-relative URL path.
    pub fn page_url(&self, url_path: &str) -> String {
        let base = self.build.base_url.trim_end_matches('/');
        if url_path.starts_with('/') {
            format!("{base}{url_path}")
        } else {
            format!("{base}/{url_path}")
        }
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = Self::normalize_path(&root);
        self.build.root = Some(root.clone());

        Self::update_option(&mut self.build.base_url, cli.base_url.as_ref());

        if let Commands::Inject { output, pretty, .. } = &cli.command {
            if let Some(output) = output {
                self.build.output = Some(output.clone());
            }
            Self::update_option(&mut self.posting.pretty, pretty.as_ref());
        }

        self.update_path_with_root(&root);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths against the root directory.
    fn update_path_with_root(&mut self, root: &Path) {
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.pages = Self::normalize_path(&root.join(&self.build.pages));
        if let Some(output) = self.build.output.as_ref() {
            self.build.output = Some(Self::normalize_path(&root.join(output)));
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.publisher.name.trim().is_empty() {
            bail!(ConfigError::Validation("[publisher.name] must not be empty".into()));
        }

        for (field, url) in [
            ("[publisher.url]", &self.publisher.url),
            ("[publisher.logo]", &self.publisher.logo),
            ("[build.base_url]", &self.build.base_url),
        ] {
            if !url.starts_with("http") {
                bail!(ConfigError::Validation(format!(
                    "{field} must start with http:// or https://"
                )));
            }
        }

        if self.posting.word_count.parse::<u64>().is_err() {
            bail!(ConfigError::Validation(format!(
                "[posting.word_count] must be a non-negative integer, got `{}`",
                self.posting.word_count
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
