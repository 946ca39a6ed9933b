//! Filesystem content source.
//!
//! Walks the content directory and turns every file into a [`ContentNode`]:
//! markdown files become documents, everything else becomes an asset.
//! Per-file problems are reported in-band on the [`QueryResult`].

use super::{ContentNode, ContentSource, QueryError, QueryResult, frontmatter};
use crate::utils::date::PostDate;
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Content directory on disk.
#[derive(Debug, Clone)]
pub struct ContentDir {
    root: PathBuf,
    extensions: Vec<String>,
}

impl ContentDir {
    pub fn new(root: impl Into<PathBuf>, extensions: &[String]) -> Self {
        Self {
            root: root.into(),
            extensions: extensions.iter().map(|e| e.to_ascii_lowercase()).collect(),
        }
    }

    fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Id of a file: its path relative to the content root, `/`-separated.
    fn node_id(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn load(&self, path: &Path) -> Result<ContentNode, QueryError> {
        let id = self.node_id(path);
        if !self.is_document(path) {
            return Ok(ContentNode::asset(id));
        }

        let source = fs::read_to_string(path)
            .map_err(|err| QueryError::at(&id, format!("cannot read file: {err}")))?;
        let (frontmatter, body) = frontmatter::extract(&source)
            .map_err(|err| QueryError::at(&id, format!("{err:#}")))?;

        let date = match frontmatter.get("date") {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => {
                let text = frontmatter.text("date").unwrap_or_default();
                let date = PostDate::parse(&text).map_err(|err| {
                    QueryError::at(&id, format!("invalid date {value}: {err}"))
                })?;
                Some(date)
            }
        };

        let mut node = ContentNode::document(id, frontmatter).with_body(body);
        node.date = date;
        Ok(node)
    }
}

impl ContentSource for ContentDir {
    fn query(&self) -> QueryResult<Vec<ContentNode>> {
        if !self.root.is_dir() {
            return QueryResult::failed(vec![QueryError::at(
                self.root.display().to_string(),
                "content directory not found",
            )]);
        }

        let mut errors = Vec::new();
        let paths: Vec<PathBuf> = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    errors.push(QueryError::new(format!("cannot walk content directory: {err}")));
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                let name = e.file_name().to_str().unwrap_or_default();
                !IGNORED_FILES.contains(&name)
            })
            .map(walkdir::DirEntry::into_path)
            .collect();

        // Order of the collected results follows `paths`.
        let loaded: Vec<_> = paths.par_iter().map(|path| self.load(path)).collect();

        let mut nodes = Vec::with_capacity(loaded.len());
        for result in loaded {
            match result {
                Ok(node) => nodes.push(node),
                Err(err) => errors.push(err),
            }
        }

        QueryResult {
            data: Some(nodes),
            errors,
        }
    }
}
