//! Page requests handed to the renderer.

use crate::content::ContentNode;
use serde::{Serialize, Serializer};

/// Instruction to render one page.
///
/// Borrows the sorted node slice it was sequenced from.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageRequest<'a> {
    /// Public URL of the page.
    pub path: &'a str,
    pub context: PageContext<'a>,
    /// Node the page renders.
    #[serde(skip)]
    pub node: &'a ContentNode,
}

/// Data passed through to the page template.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageContext<'a> {
    pub slug: &'a str,
    /// Older neighbour (next index in the newest-first order).
    #[serde(serialize_with = "serialize_neighbor")]
    pub prev: Option<&'a ContentNode>,
    /// Newer neighbour (previous index in the newest-first order).
    #[serde(serialize_with = "serialize_neighbor")]
    pub next: Option<&'a ContentNode>,
}

impl<'a> PageRequest<'a> {
    pub fn prev(&self) -> Option<&'a ContentNode> {
        self.context.prev
    }

    pub fn next(&self) -> Option<&'a ContentNode> {
        self.context.next
    }
}

/// What the template sees of a neighbour.
#[derive(Serialize)]
struct NeighborRef<'a> {
    slug: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
}

fn serialize_neighbor<S: Serializer>(
    node: &Option<&ContentNode>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    node.map(|node| NeighborRef {
        slug: node.slug(),
        title: node.title(),
    })
    .serialize(serializer)
}
