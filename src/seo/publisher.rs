//! Mount-scoped publishing of a post's structured data.
//!
//! ```text
//! mount(doc) ──► publish(a) ──► publish(a) ──► publish(b) ──► drop
//!                   │              │              │             │
//!                 attach a       no-op       detach a,       detach b
//!                                            attach b
//! ```

use super::{BlogPosting, SeoError};
use crate::{
    config::SeoConfig,
    content::ContentItem,
    document::{Document, HeadNode, NodeId},
    utils::date::{Clock, SystemClock},
};

/// The node currently attached on behalf of a post.
#[derive(Debug)]
struct Attached {
    item_id: String,
    node: NodeId,
}

/// Publishes one post's `BlogPosting` into a document head at a time.
///
/// The publisher holds the document's exclusive borrow for as long as it is
/// mounted, and detaches its node when dropped, on unwinding too.
pub struct StructuredDataPublisher<'a, D: Document, C: Clock = SystemClock> {
    document: &'a mut D,
    config: &'a SeoConfig,
    clock: C,
    attached: Option<Attached>,
}

impl<'a, D: Document> StructuredDataPublisher<'a, D> {
    pub fn mount(document: &'a mut D, config: &'a SeoConfig) -> Self {
        Self::with_clock(document, config, SystemClock)
    }
}

impl<'a, D: Document, C: Clock> StructuredDataPublisher<'a, D, C> {
    pub fn with_clock(document: &'a mut D, config: &'a SeoConfig, clock: C) -> Self {
        Self {
            document,
            config,
            clock,
            attached: None,
        }
    }

    /// Show `item`: attach its descriptor, replacing the previous post's.
    ///
    /// Publishing the post that is already attached does nothing, so
    /// `dateModified` keeps the time of the first publish.
    pub fn publish(&mut self, item: &ContentItem) -> Result<(), SeoError> {
        if let Some(attached) = &self.attached
            && attached.item_id == item.id
        {
            return Ok(());
        }

        let posting =
            BlogPosting::build(item, self.config, self.document.location(), self.clock.now());
        let body = posting.to_json(self.config.posting.pretty)?;

        self.retract();
        let node = self.document.append_to_head(HeadNode::json_ld(body));
        self.attached = Some(Attached {
            item_id: item.id.clone(),
            node,
        });
        Ok(())
    }

    /// Detach the current descriptor. Returns whether one was attached.
    pub fn retract(&mut self) -> bool {
        match self.attached.take() {
            Some(attached) => self.document.remove_from_head(attached.node),
            None => false,
        }
    }

    /// Id of the post currently published.
    #[cfg(test)]
    pub fn current(&self) -> Option<&str> {
        self.attached.as_ref().map(|attached| attached.item_id.as_str())
    }

    pub fn document(&self) -> &D {
        &*self.document
    }
}

impl<D: Document, C: Clock> Drop for StructuredDataPublisher<'_, D, C> {
    fn drop(&mut self) {
        self.retract();
    }
}
