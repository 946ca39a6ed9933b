//! Content node types.

use super::Frontmatter;
use crate::utils::date::PostDate;
use serde::Serialize;
use std::fmt;

/// Stable identifier assigned at ingestion (source path relative to the content dir).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Record type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// An authored post; the only kind that gets a slug and a page.
    Document,
    /// Any other ingested file (images, downloads, ...).
    Asset,
}

/// Fields derived during the build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// One ingested content record.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub frontmatter: Frontmatter,
    pub date: Option<PostDate>,
    /// Markdown body with frontmatter stripped. Empty for assets.
    pub body: String,
    pub fields: NodeFields,
}

impl ContentNode {
    pub fn document(id: impl Into<String>, frontmatter: Frontmatter) -> Self {
        Self {
            id: NodeId::new(id),
            kind: NodeKind::Document,
            frontmatter,
            date: None,
            body: String::new(),
            fields: NodeFields::default(),
        }
    }

    pub fn asset(id: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(id),
            kind: NodeKind::Asset,
            frontmatter: Frontmatter::default(),
            date: None,
            body: String::new(),
            fields: NodeFields::default(),
        }
    }

    pub fn with_date(mut self, date: PostDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Return this node with its derived slug set.
    pub fn with_slug(mut self, slug: String) -> Self {
        self.fields.slug = Some(slug);
        self
    }

    pub const fn is_document(&self) -> bool {
        matches!(self.kind, NodeKind::Document)
    }

    pub fn slug(&self) -> Option<&str> {
        self.fields.slug.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.frontmatter.get_str("title")
    }
}
