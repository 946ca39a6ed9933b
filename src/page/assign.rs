//! Slug assignment.
//!
//! Derives each document's public path from its frontmatter:
//!
//! | frontmatter            | result (`prefix = "/b"`, precedence `title`) |
//! |------------------------|----------------------------------------------|
//! | `slug: Intro`          | `/b/intro`                                   |
//! | `title: Hello, World!` | `/b/hello-world`                             |
//! | both                   | from `title` (or `slug`, per precedence)     |
//! | neither                | no slug                                      |

use crate::{
    config::{SlugConfig, SlugPrecedence},
    content::{ContentNode, Frontmatter},
    utils::slug::{join_slug, slugify},
};

/// Compute the slug a document's frontmatter asks for, if any.
pub fn resolve_slug(frontmatter: &Frontmatter, config: &SlugConfig) -> Option<String> {
    let order = match config.precedence {
        SlugPrecedence::Title => ["title", "slug"],
        SlugPrecedence::Slug => ["slug", "title"],
    };

    order
        .iter()
        .find_map(|key| frontmatter.text(key))
        .map(|text| join_slug(&config.prefix, &slugify(&text)))
}

/// Return the node with its slug attached.
///
/// Non-documents and nodes that already carry a slug come back unchanged.
pub fn assign_slug(node: ContentNode, config: &SlugConfig) -> ContentNode {
    if !node.is_document() || node.slug().is_some() {
        return node;
    }
    match resolve_slug(&node.frontmatter, config) {
        Some(slug) => node.with_slug(slug),
        None => node,
    }
}

/// Assign slugs to a whole ingestion result, preserving order.
pub fn assign_slugs(nodes: Vec<ContentNode>, config: &SlugConfig) -> Vec<ContentNode> {
    nodes
        .into_iter()
        .map(|node| assign_slug(node, config))
        .collect()
}
