//! Build error types.

use crate::{
    content::{NodeId, QueryFailure},
    page::{PageError, SlugConflict},
};
use std::fmt::Display;
use thiserror::Error;

/// Errors that abort a build before any output is written
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Query(#[from] QueryFailure),

    #[error("{} post(s) have neither `slug` nor `title` in frontmatter:{}", .0.len(), bullets(.0))]
    MissingSlug(Vec<NodeId>),

    #[error("{} slug(s) are claimed by more than one post:{}", .0.len(), bullets(.0))]
    DuplicateSlugs(Vec<SlugConflict>),

    #[error(transparent)]
    Page(#[from] PageError),
}

fn bullets<T: Display>(items: &[T]) -> String {
    items.iter().map(|item| format!("\n  - {item}")).collect()
}
