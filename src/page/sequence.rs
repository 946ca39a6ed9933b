//! Archive ordering and neighbour linking.

use super::{PageContext, PageError, PageRequest};
use crate::{content::ContentNode, utils::date::PostDate};
use std::cmp::Ordering;

/// Compare two dates for sorting (newest first).
///
/// Items with dates come before items without dates.
fn compare_newest_first(a: Option<PostDate>, b: Option<PostDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort nodes newest first.
///
/// The sort is stable: equal dates (and undated nodes, which go last) keep
/// their ingestion order.
pub fn sort_by_date(mut nodes: Vec<ContentNode>) -> Vec<ContentNode> {
    nodes.sort_by(|a, b| compare_newest_first(a.date, b.date));
    nodes
}

/// Emit one page request per document, linked to its neighbours.
///
/// `nodes` must already be in archive order. Non-documents are ignored.
/// In the newest-first order, `next` is the newer neighbour at `i - 1` and
/// `prev` the older one at `i + 1`.
pub fn sequence(nodes: &[ContentNode]) -> Result<Vec<PageRequest<'_>>, PageError> {
    let posts: Vec<&ContentNode> = nodes.iter().filter(|n| n.is_document()).collect();

    posts
        .iter()
        .enumerate()
        .map(|(i, &node)| {
            let Some(slug) = node.slug() else {
                return Err(PageError::UnresolvedSlug(node.id.clone()));
            };

            let next = i.checked_sub(1).map(|j| posts[j]);
            let prev = posts.get(i + 1).copied();

            Ok(PageRequest {
                path: slug,
                context: PageContext { slug, prev, next },
                node,
            })
        })
        .collect()
}
