//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ldpost: publish BlogPosting structured data into blog post pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: ldpost.toml)
    #[arg(short = 'C', long, default_value = "ldpost.toml")]
    pub config: PathBuf,

    /// Override base URL used to build each page's location.
    ///
    /// Useful when the same pages are deployed under a staging domain.
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Inject BlogPosting JSON-LD into the head of every post page
    Inject {
        /// Output directory (default: `[build].output`, or the pages directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail when a post has no page file instead of skipping it
        #[arg(long)]
        strict: bool,

        /// Pretty-print the injected JSON
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        pretty: Option<bool>,
    },

    /// Print the JSON-LD descriptor of one post to stdout
    Print {
        /// Post id as listed in the content index
        id: String,
    },

    /// Report pages carrying duplicate or malformed BlogPosting blocks
    Check {
        /// Directory to scan (default: the inject output directory)
        dir: Option<PathBuf>,
    },
}

impl Cli {
    pub const fn is_inject(&self) -> bool {
        matches!(self.command, Commands::Inject { .. })
    }
}
