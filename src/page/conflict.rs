//! Slug collision detection.
//!
//! Two pages on the same path would silently overwrite each other's output,
//! so every collision is collected and reported at once.

use super::PageRequest;
use crate::content::NodeId;
use std::{collections::BTreeMap, fmt};

/// A path claimed by more than one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugConflict {
    pub slug: String,
    /// Claiming nodes, in archive order.
    pub ids: Vec<NodeId>,
}

impl fmt::Display for SlugConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<_> = self.ids.iter().map(NodeId::as_str).collect();
        write!(f, "`{}` <- {}", self.slug, ids.join(", "))
    }
}

/// Find every path claimed by more than one page, sorted by path.
pub fn find_conflicts(pages: &[PageRequest<'_>]) -> Vec<SlugConflict> {
    let mut claims: BTreeMap<&str, Vec<&NodeId>> = BTreeMap::new();
    for page in pages {
        claims.entry(page.path).or_default().push(&page.node.id);
    }

    claims
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|(slug, ids)| SlugConflict {
            slug: slug.to_owned(),
            ids: ids.into_iter().cloned().collect(),
        })
        .collect()
}
