//! Content ingestion.
//!
//! Produces the immutable list of [`ContentNode`]s a build works on.
//!
//! ```text
//! content/                       ContentDir::query()
//! ├── posts/hello.mdx   ──►      Document { frontmatter, date, body }
//! └── posts/cover.png   ──►      Asset
//! ```

pub mod frontmatter;
mod ingest;
mod node;
mod query;

pub use frontmatter::Frontmatter;
pub use ingest::ContentDir;
pub use node::{ContentNode, NodeId, NodeKind};
pub use query::{ContentSource, QueryError, QueryFailure, QueryResult};
