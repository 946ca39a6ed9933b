//! `[base]` section configuration.
//!
//! Basic blog information, written as the header of the index listing.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in postline.toml - basic blog metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "tsers."
/// description = "Getting things done."
/// author = "Alice"
/// url = "https://example.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Blog title shown above the listing.
    #[serde(default)]
    pub title: String,

    /// Author name for the bio line.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Short tagline.
    #[serde(default)]
    pub description: String,

    /// Public URL of the blog, e.g. "https://example.com".
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,
}
