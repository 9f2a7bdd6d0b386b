//! Content index: the list of posts that get structured data.
//!
//! # Format
//!
//! ```toml
//! [[posts]]
//! id = "hello-world"
//! title = "Hello"
//! subtitle = "World"
//! image = "https://www.ideamanifest.com/images/hello.png"
//! category = "Tech"
//! date = "2024-01-01"
//! ```

mod item;

pub use item::ContentItem;
#[cfg(test)]
pub(crate) use item::sample;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("cannot read content index `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid content index: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("duplicate post id `{0}`")]
    DuplicateId(String),

    #[error("no post with id `{0}`")]
    UnknownId(String),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawIndex {
    #[serde(default)]
    posts: Vec<ContentItem>,
}

/// Posts in index order, with lookup by id.
#[derive(Debug, Default)]
pub struct PostIndex {
    posts: Vec<ContentItem>,
    by_id: FxHashMap<String, usize>,
}

impl PostIndex {
    pub fn from_str(content: &str) -> Result<Self, ContentError> {
        let raw: RawIndex = toml::from_str(content)?;
        Self::from_items(raw.posts)
    }

    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let content =
            fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    pub fn from_items(posts: Vec<ContentItem>) -> Result<Self, ContentError> {
        let mut by_id = FxHashMap::default();
        for (index, post) in posts.iter().enumerate() {
            if by_id.insert(post.id.clone(), index).is_some() {
                return Err(ContentError::DuplicateId(post.id.clone()));
            }
        }
        Ok(Self { posts, by_id })
    }

    pub fn get(&self, id: &str) -> Result<&ContentItem, ContentError> {
        self.by_id
            .get(id)
            .map(|&index| &self.posts[index])
            .ok_or_else(|| ContentError::UnknownId(id.to_owned()))
    }

    pub fn as_slice(&self) -> &[ContentItem] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
