//! `[build]` section configuration.
//!
//! Contains paths, slug rules and index listing settings.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Enums
// ============================================================================

/// Which frontmatter field wins when a post declares both `slug` and `title`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugPrecedence {
    /// `title` wins (default).
    #[default]
    Title,
    /// An explicit `slug` wins.
    Slug,
}

/// What to do with a post that has neither `slug` nor `title`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingSlugPolicy {
    /// Leave the post out and warn (default).
    #[default]
    Skip,
    /// Fail the build.
    Error,
}

// ============================================================================
// Main BuildConfig
// ============================================================================

/// `[build]` section in postline.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"      # Source directory
/// output = "public"        # Output directory
/// extensions = ["md", "mdx"]
///
/// [build.slug]
/// prefix = "/b"
/// precedence = "title"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Content source directory (markdown posts and their assets).
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// File extensions treated as posts.
    #[serde(default = "defaults::build::extensions")]
    #[educe(Default = defaults::build::extensions())]
    pub extensions: Vec<String>,

    /// Page manifest path, relative to `output`.
    #[serde(default = "defaults::build::manifest")]
    #[educe(Default = defaults::build::manifest())]
    pub manifest: PathBuf,

    /// Remove the output directory before building.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// Slug derivation rules.
    #[serde(default)]
    pub slug: SlugConfig,

    /// Index listing settings.
    #[serde(default)]
    pub index: IndexConfig,
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.slug]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SlugConfig {
    /// URL prefix every post lives under.
    #[serde(default = "defaults::build::slug::prefix")]
    #[educe(Default = defaults::build::slug::prefix())]
    pub prefix: String,

    /// Field precedence when both `slug` and `title` are present.
    #[serde(default = "defaults::build::slug::precedence")]
    #[educe(Default = defaults::build::slug::precedence())]
    pub precedence: SlugPrecedence,

    /// Handling of posts without a slug basis.
    #[serde(default = "defaults::build::slug::on_missing")]
    #[educe(Default = defaults::build::slug::on_missing())]
    pub on_missing: MissingSlugPolicy,
}

/// `[build.index]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Write the index listing.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Listing path, relative to `output`.
    #[serde(default = "defaults::build::index::path")]
    #[educe(Default = defaults::build::index::path())]
    pub path: PathBuf,

    /// Maximum excerpt length in characters.
    #[serde(default = "defaults::build::index::excerpt_length")]
    #[educe(Default = defaults::build::index::excerpt_length())]
    pub excerpt_length: usize,

    /// Reading speed used for `time_to_read`.
    #[serde(default = "defaults::build::index::words_per_minute")]
    #[educe(Default = defaults::build::index::words_per_minute())]
    pub words_per_minute: usize,
}

// ============================================================================
// Tests
// ============================================================================
