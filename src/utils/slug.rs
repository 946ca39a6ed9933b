//! URL slugification.
//!
//! Converts human-readable text into URL-safe path segments.

/// Convert text to a URL slug.
///
/// Lowercases ASCII, transliterates non-ASCII (e.g., "你好" → "ni-hao"),
/// collapses every run of non-alphanumeric characters into a single `-`
/// and trims leading/trailing `-`.
pub fn slugify(text: &str) -> String {
    slug::slugify(text)
}

/// Join a URL prefix and an already slugified segment: `("/b", "hi")` → `/b/hi`.
///
/// Trailing slashes on the prefix are ignored, so `"/b/"` and `"/b"` agree.
pub fn join_slug(prefix: &str, segment: &str) -> String {
    format!("{}/{segment}", prefix.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_punctuation() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
    }

    #[test]
    fn test_slugify_lowercases() {
        assert_eq!(slugify("RUST Is FUN"), "rust-is-fun");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("a  --  b__c...d"), "a-b-c-d");
    }

    #[test]
    fn test_slugify_trims_hyphens() {
        assert_eq!(slugify("--edge case--"), "edge-case");
        assert_eq!(slugify("  (parens)  "), "parens");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("Top 10 tips for 2024"), "top-10-tips-for-2024");
    }

    #[test]
    fn test_slugify_transliterates_unicode() {
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
        assert_eq!(slugify("你好"), "ni-hao");
    }

    #[test]
    fn test_slugify_degenerate_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!! ???"), "");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let inputs = [
            "Hello, World!",
            "  Leading and trailing  ",
            "Already-a-slug",
            "Mixed_CASE and 123 numbers",
            "Ünïcödé – dashes — everywhere",
            "",
        ];
        for input in inputs {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_join_slug() {
        assert_eq!(join_slug("/b", "hello"), "/b/hello");
        assert_eq!(join_slug("/b/", "hello"), "/b/hello");
        assert_eq!(join_slug("/b", ""), "/b/");
    }
}
