//! Home page listing.
//!
//! The blog header from `[base]` and `[extra]`, followed by one entry per
//! planned page, newest first, with what the listing card shows: title,
//! long date, summary, a plain-text excerpt and reading time.

use crate::{
    config::{IndexConfig, SiteConfig},
    content::frontmatter::toml_to_json,
    page::PageRequest,
};
use pulldown_cmark::{Event, Parser, TagEnd};
use serde::Serialize;
use serde_json::{Map, Value};

/// Contents of the listing file.
#[derive(Debug, Serialize)]
pub struct SiteIndex<'a> {
    pub site: SiteHeader<'a>,
    pub posts: Vec<IndexEntry>,
}

/// Heading and bio rendered above the listing.
#[derive(Debug, PartialEq, Serialize)]
pub struct SiteHeader<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub author: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl<'a> SiteIndex<'a> {
    pub fn new(config: &'a SiteConfig, pages: &[PageRequest<'_>]) -> Self {
        let base = &config.base;
        let extra = config
            .extra
            .iter()
            .map(|(key, value)| (key.clone(), toml_to_json(value.clone())))
            .collect();

        Self {
            site: SiteHeader {
                title: &base.title,
                description: &base.description,
                author: &base.author,
                url: base.url.as_deref(),
                extra,
            },
            posts: build_index(pages, &config.build.index),
        }
    }
}

/// One card in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub excerpt: String,
    /// Minutes, at least 1.
    pub time_to_read: usize,
}

/// Build the listing from sequenced pages (already newest first).
pub fn build_index(pages: &[PageRequest<'_>], config: &IndexConfig) -> Vec<IndexEntry> {
    pages
        .iter()
        .map(|page| {
            let node = page.node;
            let text = plain_text(&node.body);
            IndexEntry {
                slug: page.path.to_owned(),
                title: node.title().unwrap_or(page.path).to_owned(),
                date: node.date.map(|d| d.to_long_format()),
                summary: node.frontmatter.text("summary"),
                excerpt: excerpt(&text, config.excerpt_length),
                time_to_read: time_to_read(&text, config.words_per_minute),
            }
        })
        .collect()
}

/// Markdown body as plain text with whitespace collapsed.
pub fn plain_text(markdown: &str) -> String {
    let mut text = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => text.push(' '),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `text` to at most `max_chars` characters, backing off to a word
/// boundary and appending `…` when anything was cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }

    let cut: String = text.chars().take(max_chars).collect();
    let at_word_end = text.chars().nth(max_chars).is_some_and(char::is_whitespace);
    let cut = match cut.rfind(' ') {
        _ if at_word_end => cut.as_str(),
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}…", cut.trim_end().trim_end_matches(|c: char| c.is_ascii_punctuation()))
}

/// Reading time in whole minutes, rounded up, never below 1.
pub fn time_to_read(text: &str, words_per_minute: usize) -> usize {
    let words = text.split_whitespace().count();
    words.div_ceil(words_per_minute.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        content::{ContentNode, Frontmatter},
        page::sequence,
        utils::date::PostDate,
    };

    #[test]
    fn test_plain_text_strips_markup() {
        let md = "# Heading\n\nSome *emphasis* and `code`.\n\n- one\n- two\n\n[link](https://x.y)";
        assert_eq!(plain_text(md), "Heading Some emphasis and code. one two link");
    }

    #[test]
    fn test_plain_text_skips_html_and_images_urls() {
        let md = "<div>raw</div>\n\n![alt text](pic.png) after";
        let text = plain_text(md);
        assert!(!text.contains("pic.png"));
        assert!(text.contains("after"));
    }

    #[test]
    fn test_excerpt_short_text_untouched() {
        assert_eq!(excerpt("short text", 200), "short text");
    }

    #[test]
    fn test_excerpt_cuts_at_word_boundary() {
        assert_eq!(excerpt("the quick brown fox jumps", 12), "the quick…");
    }

    #[test]
    fn test_excerpt_keeps_word_ending_at_cut() {
        assert_eq!(excerpt("the quick brown", 9), "the quick…");
        assert_eq!(excerpt("the quick brown", 10), "the quick…");
    }

    #[test]
    fn test_excerpt_trims_trailing_punctuation() {
        assert_eq!(excerpt("first, second, third", 14), "first, second…");
        assert_eq!(excerpt("first, second, third", 12), "first…");
    }

    #[test]
    fn test_excerpt_single_long_word() {
        assert_eq!(excerpt("abcdefghij", 4), "abcd…");
    }

    #[test]
    fn test_excerpt_counts_chars_not_bytes() {
        assert_eq!(excerpt("äää ööö", 7), "äää ööö");
        assert_eq!(excerpt("äää ööö üüü", 6), "äää…");
        assert_eq!(excerpt("äää ööö üüü", 7), "äää ööö…");
        assert_eq!(excerpt("äää ööö üüü", 8), "äää ööö…");
    }

    #[test]
    fn test_time_to_read() {
        assert_eq!(time_to_read("", 265), 1);
        assert_eq!(time_to_read("one two three", 265), 1);
        let long = "word ".repeat(531);
        assert_eq!(time_to_read(&long, 265), 3);
        assert_eq!(time_to_read(&"w ".repeat(10), 5), 2);
    }

    #[test]
    fn test_build_index_entries() {
        let nodes = vec![
            ContentNode::document(
                "new.md",
                Frontmatter::new()
                    .with("title", "New Post")
                    .with("summary", "What changed"),
            )
            .with_date(PostDate::from_ymd(2023, 3, 1))
            .with_body("Hello **there** reader.")
            .with_slug("/b/new-post".into()),
            ContentNode::document("untitled.md", Frontmatter::new().with("slug", "x"))
                .with_slug("/b/x".into()),
        ];
        let pages = sequence(&nodes).unwrap();
        let index = build_index(&pages, &IndexConfig::default());

        assert_eq!(
            index[0],
            IndexEntry {
                slug: "/b/new-post".into(),
                title: "New Post".into(),
                date: Some("March 01, 2023".into()),
                summary: Some("What changed".into()),
                excerpt: "Hello there reader.".into(),
                time_to_read: 1,
            }
        );
        assert_eq!(index[1].title, "/b/x");
        assert_eq!(index[1].date, None);
        assert_eq!(index[1].excerpt, "");
    }

    #[test]
    fn test_site_index_carries_blog_header() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            title = "tsers."
            description = "Getting things done."
            author = "Alice"
            url = "https://tsers.dev"

            [extra]
            twitter = "alice"
            since = 2019-04-01
        "#,
        )
        .unwrap();
        let nodes = vec![
            ContentNode::document("a.md", Frontmatter::new().with("title", "A"))
                .with_slug("/b/a".into()),
        ];
        let pages = sequence(&nodes).unwrap();

        let index = serde_json::to_value(SiteIndex::new(&config, &pages)).unwrap();

        assert_eq!(index["site"]["title"], "tsers.");
        assert_eq!(index["site"]["description"], "Getting things done.");
        assert_eq!(index["site"]["author"], "Alice");
        assert_eq!(index["site"]["url"], "https://tsers.dev");
        assert_eq!(index["site"]["extra"]["twitter"], "alice");
        assert_eq!(index["site"]["extra"]["since"], "2019-04-01");
        assert_eq!(index["posts"][0]["slug"], "/b/a");
    }

    #[test]
    fn test_site_index_omits_empty_optional_header_fields() {
        let config = SiteConfig::default();
        let index = serde_json::to_value(SiteIndex::new(&config, &[])).unwrap();

        assert!(index["site"].get("url").is_none());
        assert!(index["site"].get("extra").is_none());
        assert_eq!(index["posts"], serde_json::json!([]));
    }
}
