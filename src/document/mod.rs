//! Hosting documents that structured data is published into.
//!
//! A [`Document`] exposes exactly what a publisher needs: append a node to
//! the head, remove a node it appended earlier, and report where the
//! document lives.

mod page;

pub use page::Page;

use thiserror::Error;

/// Script `type` for JSON-LD blocks.
pub const JSON_LD_MIME: &str = "application/ld+json";

/// Attribute marking script nodes this tool owns.
///
/// Marked nodes found in a page's source are dropped on render, so a page
/// injected in place can be injected again.
pub const MARKER_ATTR: &str = "data-ldpost";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document has no <head> element")]
    MissingHead,

    #[error("HTML parse error at position {position}")]
    Parse {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("failed to write document")]
    Io(#[from] std::io::Error),
}

/// Handle to a node attached to a document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

/// A `<script>` node destined for the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadNode {
    /// Value of the `type` attribute.
    pub mime: &'static str,
    /// Element body, written verbatim.
    pub body: String,
}

impl HeadNode {
    pub fn json_ld(body: String) -> Self {
        Self {
            mime: JSON_LD_MIME,
            body,
        }
    }
}

/// The document's head region as seen by a publisher.
pub trait Document {
    /// Attach `node` at the end of the head.
    fn append_to_head(&mut self, node: HeadNode) -> NodeId;

    /// Detach a node. Returns false if `id` is not attached.
    fn remove_from_head(&mut self, id: NodeId) -> bool;

    /// Absolute URL of the document.
    fn location(&self) -> &str;
}
