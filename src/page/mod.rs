//! Page planning: slugs, archive order and neighbour links.
//!
//! # Flow
//!
//! ```text
//! Vec<ContentNode> ──► assign_slugs() ──► sort_by_date() ──► sequence() ──► Vec<PageRequest>
//!  (ingested)           (new Vec)          (newest first)      (borrows)        │
//!                                                                               ▼
//!                                                                   find_conflicts()
//! ```
//!
//! Each phase takes the previous phase's output by value or by reference;
//! nothing is shared or mutated behind the caller's back.

mod assign;
mod conflict;
mod request;
mod sequence;

pub use assign::{assign_slug, assign_slugs, resolve_slug};
pub use conflict::{SlugConflict, find_conflicts};
pub use request::{PageContext, PageRequest};
pub use sequence::{sequence, sort_by_date};

use crate::content::NodeId;
use thiserror::Error;

/// Page sequencing errors
#[derive(Debug, Error)]
pub enum PageError {
    #[error("document `{0}` reached page sequencing without a slug")]
    UnresolvedSlug(NodeId),
}
