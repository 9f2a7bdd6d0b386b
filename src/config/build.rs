//! `[build]` section configuration.
//!
//! Where posts and pages live and how page URLs are formed.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in ldpost.toml.
///
/// # Example
/// ```toml
/// [build]
/// content = "posts.toml"
/// pages = "public/blog"
/// output = "dist/blog"
/// base_url = "https://www.ideamanifest.com"
/// path_prefix = "blog"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root, set from the CLI.
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Content index file (relative to root).
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Directory holding the rendered post pages (relative to root).
    #[serde(default = "defaults::build::pages")]
    #[educe(Default = defaults::build::pages())]
    pub pages: PathBuf,

    /// Where injected pages are written. Unset means in place.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: Option<PathBuf>,

    /// Site origin used for each page's `url`.
    #[serde(default = "defaults::build::base_url")]
    #[educe(Default = defaults::build::base_url())]
    pub base_url: String,

    /// URL path segment under which `pages` is served.
    #[serde(default = "defaults::build::path_prefix")]
    #[educe(Default = defaults::build::path_prefix())]
    pub path_prefix: String,
}
