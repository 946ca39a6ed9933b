//! Build orchestration.
//!
//! ```text
//! ContentDir ──► query() ──► assign_slugs() ──► SitePlan ──► pages() ──► pages.json
//!                (fails on     (title/slug)      (sorted,     (sequenced,   index.json
//!                 any error)                     slugged)      conflict-free)
//! ```
//!
//! Nothing is written unless every phase succeeds.

mod error;
mod output;

pub use error::BuildError;

use crate::{
    config::{MissingSlugPolicy, SiteConfig, SlugConfig},
    content::{ContentDir, ContentNode, ContentSource, NodeId},
    index::SiteIndex,
    log,
    page::{PageRequest, assign_slugs, find_conflicts, sequence, sort_by_date},
};
use anyhow::Result;
use output::{prepare_output, write_json};

/// Slugged posts in archive order, ready to be sequenced.
#[derive(Debug)]
pub struct SitePlan {
    /// Documents with a slug, newest first.
    pub posts: Vec<ContentNode>,
    /// Documents dropped because no slug could be derived.
    pub skipped: Vec<NodeId>,
    /// Number of non-document files seen.
    pub assets: usize,
}

impl SitePlan {
    /// Sequence the posts and reject slugs claimed twice.
    pub fn pages(&self) -> Result<Vec<PageRequest<'_>>, BuildError> {
        let pages = sequence(&self.posts)?;
        let conflicts = find_conflicts(&pages);
        if !conflicts.is_empty() {
            return Err(BuildError::DuplicateSlugs(conflicts));
        }
        Ok(pages)
    }
}

/// Query `source`, derive slugs and order the posts.
pub fn plan_site(source: &impl ContentSource, config: &SlugConfig) -> Result<SitePlan, BuildError> {
    let nodes = source.query().into_result()?;
    let nodes = assign_slugs(nodes, config);

    let mut posts = Vec::with_capacity(nodes.len());
    let mut skipped = Vec::new();
    let mut assets = 0;
    for node in nodes {
        if !node.is_document() {
            assets += 1;
        } else if node.slug().is_some() {
            posts.push(node);
        } else {
            skipped.push(node.id);
        }
    }

    if !skipped.is_empty() && config.on_missing == MissingSlugPolicy::Error {
        return Err(BuildError::MissingSlug(skipped));
    }

    Ok(SitePlan {
        posts: sort_by_date(posts),
        skipped,
        assets,
    })
}

/// Plan the site from the configured content directory.
fn plan(config: &SiteConfig) -> Result<SitePlan> {
    let source = ContentDir::new(&config.build.content, &config.build.extensions);
    log!("ingest"; "reading {}", config.build.content.display());

    let plan = plan_site(&source, &config.build.slug)?;
    log!("slug"; "assigned {} slugs under {}", plan.posts.len(), config.build.slug.prefix);
    for id in &plan.skipped {
        log!("warn"; "skipping `{}`: no `slug` or `title` in frontmatter", id);
    }
    log!("ingest"; "found {} posts, {} assets", plan.posts.len(), plan.assets);
    Ok(plan)
}

/// Plan every page and write the manifest and index listing.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let plan = plan(config)?;
    let pages = plan.pages()?;
    log!("pages"; "planned {} pages", pages.len());

    prepare_output(&config.build.output, config.build.clean)?;

    let index = config
        .build
        .index
        .enable
        .then(|| SiteIndex::new(config, &pages));

    let (manifest, listing) = rayon::join(
        || write_json(&config.manifest_path(), &pages),
        || match &index {
            Some(listing) => write_json(&config.index_path(), listing),
            None => Ok(()),
        },
    );
    manifest?;
    listing?;

    if let Some(listing) = &index {
        log!("index"; "listed {} posts", listing.posts.len());
    }
    log!("build"; "done");
    Ok(())
}

/// Plan every page and print the sequence without writing anything.
pub fn check_site(config: &SiteConfig) -> Result<()> {
    let plan = plan(config)?;
    let pages = plan.pages()?;

    for page in &pages {
        log!(
            "pages";
            "{} (prev: {}, next: {})",
            page.path,
            neighbor_label(page.prev()),
            neighbor_label(page.next())
        );
    }
    log!("check"; "{} pages ok", pages.len());
    Ok(())
}

fn neighbor_label(node: Option<&ContentNode>) -> &str {
    node.and_then(ContentNode::slug).unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        content::{Frontmatter, QueryError, QueryResult},
        utils::date::PostDate,
    };
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn post(id: &str, title: &str, date: (u16, u8, u8)) -> ContentNode {
        ContentNode::document(id, Frontmatter::new().with("title", title))
            .with_date(PostDate::from_ymd(date.0, date.1, date.2))
    }

    fn paths<'a>(pages: &[PageRequest<'a>]) -> Vec<&'a str> {
        pages.iter().map(|p| p.path).collect()
    }

    struct Failing;

    impl ContentSource for Failing {
        fn query(&self) -> QueryResult<Vec<ContentNode>> {
            QueryResult {
                data: Some(vec![post("ok.md", "Ok", (2023, 1, 1))]),
                errors: vec![QueryError::at("bad.md", "invalid date")],
            }
        }
    }

    #[test]
    fn test_three_posts_end_to_end() {
        let source = vec![
            post("a.md", "A", (2023, 1, 1)),
            post("c.md", "C", (2023, 3, 1)),
            post("b.md", "B", (2023, 2, 1)),
        ];
        let plan = plan_site(&source, &SlugConfig::default()).unwrap();
        let pages = plan.pages().unwrap();

        assert_eq!(paths(&pages), vec!["/b/c", "/b/b", "/b/a"]);

        let b = &pages[1];
        assert_eq!(b.context.slug, "/b/b");
        assert_eq!(b.next().and_then(ContentNode::slug), Some("/b/c"));
        assert_eq!(b.prev().and_then(ContentNode::slug), Some("/b/a"));
        assert!(pages[0].next().is_none());
        assert!(pages[2].prev().is_none());
    }

    #[test]
    fn test_assets_excluded() {
        let source = vec![
            post("post.md", "Post", (2023, 1, 1)),
            ContentNode::asset("images/cover.png"),
        ];
        let plan = plan_site(&source, &SlugConfig::default()).unwrap();

        assert_eq!(plan.assets, 1);
        assert_eq!(paths(&plan.pages().unwrap()), vec!["/b/post"]);
    }

    #[test]
    fn test_query_errors_abort_before_planning() {
        let err = plan_site(&Failing, &SlugConfig::default()).unwrap_err();
        assert!(matches!(err, BuildError::Query(_)));
        assert!(err.to_string().contains("bad.md: invalid date"));
    }

    #[test]
    fn test_missing_slug_skipped_by_default() {
        let source = vec![
            post("titled.md", "Titled", (2023, 1, 1)),
            ContentNode::document("bare.md", Frontmatter::new().with("summary", "none")),
        ];
        let plan = plan_site(&source, &SlugConfig::default()).unwrap();

        assert_eq!(plan.skipped, vec![NodeId::new("bare.md")]);
        assert_eq!(paths(&plan.pages().unwrap()), vec!["/b/titled"]);
    }

    #[test]
    fn test_missing_slug_fails_when_configured() {
        let config = SlugConfig {
            on_missing: MissingSlugPolicy::Error,
            ..SlugConfig::default()
        };
        let source = vec![ContentNode::document("bare.md", Frontmatter::new())];

        let err = plan_site(&source, &config).unwrap_err();
        assert!(matches!(err, BuildError::MissingSlug(ref ids) if ids.len() == 1));
    }

    #[test]
    fn test_duplicate_slugs_rejected() {
        let source = vec![
            post("one.md", "Hello World", (2023, 2, 1)),
            post("two.md", "hello, world!", (2023, 1, 1)),
        ];
        let plan = plan_site(&source, &SlugConfig::default()).unwrap();

        match plan.pages().unwrap_err() {
            BuildError::DuplicateSlugs(conflicts) => {
                assert_eq!(conflicts.len(), 1);
                assert_eq!(conflicts[0].slug, "/b/hello-world");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_degenerate_titles_collide() {
        let source = vec![
            post("one.md", "!!!", (2023, 2, 1)),
            post("two.md", "???", (2023, 1, 1)),
        ];
        let plan = plan_site(&source, &SlugConfig::default()).unwrap();

        assert!(matches!(plan.pages(), Err(BuildError::DuplicateSlugs(_))));
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site(dir: &TempDir) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.content = dir.path().join("content");
        config.build.output = dir.path().join("public");
        config
    }

    #[test]
    fn test_build_site_writes_manifest_and_index() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        write(&content, "first.md", "---\ntitle: First\ndate: 2023-01-01\n---\nOne.");
        write(&content, "second.md", "---\ntitle: Second\ndate: 2023-02-01\n---\nTwo.");
        write(&content, "cover.png", "png");

        let config = site(&dir);
        build_site(&config).unwrap();

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(config.manifest_path()).unwrap()).unwrap();
        assert_eq!(manifest[0]["path"], "/b/second");
        assert_eq!(manifest[0]["context"]["prev"]["slug"], "/b/first");
        assert!(manifest[0]["context"]["next"].is_null());
        assert_eq!(manifest[1]["context"]["next"]["title"], "Second");

        let index: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(config.index_path()).unwrap()).unwrap();
        assert_eq!(index["posts"][0]["title"], "Second");
        assert_eq!(index["posts"][1]["date"], "January 01, 2023");
    }

    #[test]
    fn test_build_site_writes_nothing_on_error() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        write(&content, "a.md", "---\ntitle: Same\n---\n");
        write(&content, "b.md", "---\ntitle: Same\n---\n");

        let config = site(&dir);
        assert!(build_site(&config).is_err());
        assert!(!config.build.output.exists());
    }

    #[test]
    fn test_build_site_without_index() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("content"), "a.md", "---\ntitle: A\n---\n");

        let mut config = site(&dir);
        config.build.index.enable = false;
        build_site(&config).unwrap();

        assert!(config.manifest_path().exists());
        assert!(!config.index_path().exists());
    }

    #[test]
    fn test_check_site_writes_nothing() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("content"), "a.md", "---\ntitle: A\n---\n");

        let config = site(&dir);
        check_site(&config).unwrap();
        assert!(!config.build.output.exists());
    }
}
