//! Structured data for blog posts.
//!
//! [`BlogPosting`] is the pure descriptor; [`StructuredDataPublisher`] ties
//! it to a document for as long as a post is displayed.

mod descriptor;
mod publisher;

pub use descriptor::BlogPosting;
pub use publisher::StructuredDataPublisher;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeoError {
    #[error("failed to serialize structured data")]
    Json(#[from] serde_json::Error),
}
