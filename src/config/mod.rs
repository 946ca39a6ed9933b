//! Blog configuration management for `postline.toml`.
//!
//! # Sections
//!
//! | Section          | Purpose                                     |
//! |------------------|---------------------------------------------|
//! | `[base]`         | Blog metadata (title, author, url)          |
//! | `[build]`        | Paths, post extensions, manifest location   |
//! | `[build.slug]`   | Slug prefix, precedence, missing-slug policy|
//! | `[build.index]`  | Index listing (excerpt, reading time)       |
//! | `[extra]`        | User-defined custom fields                  |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "tsers."
//! author = "Alice"
//!
//! [build]
//! content = "content"
//! output = "public"
//!
//! [build.slug]
//! precedence = "title"
//! on_missing = "skip"
//! ```

mod base;
mod build;
pub mod defaults;
mod error;

pub use build::{IndexConfig, MissingSlugPolicy, SlugConfig, SlugPrecedence};
pub use error::ConfigError;

use base::BaseConfig;
use build::BuildConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing postline.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic blog information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!(ConfigError::NotFound(path.to_path_buf()));
        }
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Absolute path of the page manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.build.output.join(&self.build.manifest)
    }

    /// Absolute path of the index listing
    pub fn index_path(&self) -> PathBuf {
        self.build.output.join(&self.build.index.path)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        if let Commands::Build { clean: true } = cli.command {
            self.build.clean = true;
        }

        self.update_path_with_root(&root);
        self.config_path = Self::normalize_path(&root.join(&cli.config));
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths against the root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.base.url
            && !url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.build.extensions.is_empty() {
            bail!(ConfigError::Validation(
                "[build.extensions] must have at least one element".into()
            ));
        }

        if !self.build.slug.prefix.starts_with('/') {
            bail!(ConfigError::Validation(
                "[build.slug.prefix] must start with `/`".into()
            ));
        }

        let index = &self.build.index;
        if index.excerpt_length == 0 {
            bail!(ConfigError::Validation(
                "[build.index.excerpt_length] must be greater than 0".into()
            ));
        }
        if index.words_per_minute == 0 {
            bail!(ConfigError::Validation(
                "[build.index.words_per_minute] must be greater than 0".into()
            ));
        }
        if index.enable && index.path == self.build.manifest {
            bail!(ConfigError::Validation(
                "[build.index.path] and [build.manifest] must differ".into()
            ));
        }

        let output = &self.build.output;
        if output == self.get_root() || self.build.content.starts_with(output) {
            bail!(ConfigError::Validation(format!(
                "[build.output] `{}` must not be the project root or contain [build.content]",
                output.display()
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
