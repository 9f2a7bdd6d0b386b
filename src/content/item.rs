//! A single blog post as listed in the content index.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Minimal description of one published post.
///
/// Field values are trusted as already sanitized; nothing here validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentItem {
    /// Identity of the logical post across updates.
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Cover image URI.
    pub image: String,
    pub category: String,
    /// Publication date, passed through as written.
    pub date: String,
    /// Summary for `description`. Falls back to the subtitle.
    #[serde(default)]
    pub description: Option<String>,
    /// Page file relative to the pages directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl ContentItem {
    /// Page file relative to the pages directory, `<id>/index.html` by default.
    pub fn page_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.id).join("index.html"))
    }

    /// Site-relative URL of the page, below `path_prefix`.
    ///
    /// `index.html` collapses to its directory, as static hosts serve it.
    pub fn url_path(&self, path_prefix: &str) -> String {
        let page = self.page_path().to_string_lossy().replace('\\', "/");
        let page = match page.strip_suffix("index.html") {
            Some(dir) => dir.to_owned(),
            None => page,
        };

        let prefix = path_prefix.trim_matches('/');
        if prefix.is_empty() {
            format!("/{page}")
        } else {
            format!("/{prefix}/{page}")
        }
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.subtitle)
    }
}

#[cfg(test)]
pub(crate) fn sample(id: &str) -> ContentItem {
    ContentItem {
        id: id.into(),
        title: "Hello".into(),
        subtitle: "World".into(),
        image: "https://x/y.png".into(),
        category: "Tech".into(),
        date: "2024-01-01".into(),
        description: None,
        path: None,
    }
}
