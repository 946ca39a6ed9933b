//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn extensions() -> Vec<String> {
        vec!["md".into(), "mdx".into()]
    }

    pub fn manifest() -> PathBuf {
        "pages.json".into()
    }

    pub mod slug {
        use crate::config::{MissingSlugPolicy, SlugPrecedence};

        pub fn prefix() -> String {
            "/b".into()
        }

        pub fn precedence() -> SlugPrecedence {
            SlugPrecedence::default()
        }

        pub fn on_missing() -> MissingSlugPolicy {
            MissingSlugPolicy::default()
        }
    }

    pub mod index {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "index.json".into()
        }

        pub fn excerpt_length() -> usize {
            200
        }

        pub fn words_per_minute() -> usize {
            265
        }
    }
}
