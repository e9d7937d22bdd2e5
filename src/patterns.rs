//! Compiled regex patterns for node classification.
//!
//! All patterns are compiled once on first use with `LazyLock` and are
//! read-only afterwards, so they can be shared freely across threads.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Class/ID Keyword Patterns
// =============================================================================

/// Matches class/id names likely to hold the main content.
pub static POSITIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)article|body|content|entry|hentry|h-entry|main|page|pagination|post|text|blog|story",
    )
    .expect("POSITIVE regex")
});

/// Matches class/id names indicating boilerplate (navigation, ads, comments).
///
/// The `hid` alternatives only match `hid` as a whole space-separated token,
/// so names like "hidden-gem" hit `hidden` but "hide" and "hidalgo" do not.
pub static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)hidden|^hid$| hid$| hid |^hid |banner|combx|comment|com-|contact|foot|footer|footnote|gdpr|masthead|media|meta|outbrain|promo|related|scroll|share|shoutbox|sidebar|skyscraper|sponsor|shopping|tags|tool|widget",
    )
    .expect("NEGATIVE regex")
});

// =============================================================================
// Text Patterns
// =============================================================================

// Whitespace classes are ASCII-only: a non-breaking space is content.

/// Matches text made only of whitespace (including the empty string).
pub static ONLY_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?-u:\s)*$").expect("ONLY_WHITESPACE regex"));

/// Matches runs of two or more whitespace characters, for normalization.
///
/// Single whitespace characters (including a lone newline) are left alone.
pub static REPEATED_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\s){2,}").expect("REPEATED_WHITESPACE regex"));

/// Matches text whose last character is not whitespace.
pub static TRAILING_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\t\n\x0B\x0C\r ]$").expect("TRAILING_CONTENT regex"));

// =============================================================================
// Inline Style Patterns
// =============================================================================

/// Matches `display:none` / `display: none` in an inline style attribute.
pub static DISPLAY_NONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"display:( )?none").expect("DISPLAY_NONE regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_keywords() {
        assert!(POSITIVE.is_match("main-content"));
        assert!(POSITIVE.is_match("ARTICLE"));
        assert!(POSITIVE.is_match("h-entry"));
        assert!(!POSITIVE.is_match("sidebar"));
    }

    #[test]
    fn test_negative_keywords() {
        assert!(NEGATIVE.is_match("sidebar"));
        assert!(NEGATIVE.is_match("site-Footer"));
        assert!(NEGATIVE.is_match("social-share"));
        assert!(!NEGATIVE.is_match("main-content"));
    }

    #[test]
    fn test_hid_only_matches_whole_token() {
        assert!(NEGATIVE.is_match("hid"));
        assert!(NEGATIVE.is_match("foo hid bar"));
        assert!(NEGATIVE.is_match("hid bar"));
        assert!(NEGATIVE.is_match("foo hid"));
        assert!(!NEGATIVE.is_match("hidalgo"));
        assert!(!NEGATIVE.is_match("chide"));
    }

    #[test]
    fn test_keyword_sets_can_overlap() {
        // "comment-body" carries both a negative and a positive keyword
        assert!(POSITIVE.is_match("comment-body"));
        assert!(NEGATIVE.is_match("comment-body"));
    }

    #[test]
    fn test_only_whitespace() {
        assert!(ONLY_WHITESPACE.is_match(""));
        assert!(ONLY_WHITESPACE.is_match(" \n\t "));
        assert!(!ONLY_WHITESPACE.is_match(" x "));
    }

    #[test]
    fn test_repeated_whitespace_leaves_single_spaces() {
        let out = REPEATED_WHITESPACE.replace_all("a b  c\n\n\td", " ");
        assert_eq!(out, "a b c d");
    }

    #[test]
    fn test_nbsp_is_not_whitespace() {
        assert!(!ONLY_WHITESPACE.is_match("\u{a0}"));
        assert_eq!(REPEATED_WHITESPACE.replace_all("a\u{a0}\u{a0}b", " "), "a\u{a0}\u{a0}b");
        assert!(TRAILING_CONTENT.is_match("text\u{a0}"));
    }

    #[test]
    fn test_trailing_content() {
        assert!(TRAILING_CONTENT.is_match("text"));
        assert!(!TRAILING_CONTENT.is_match("text  "));
        assert!(!TRAILING_CONTENT.is_match(""));
    }

    #[test]
    fn test_display_none() {
        assert!(DISPLAY_NONE.is_match("color: red; display:none"));
        assert!(DISPLAY_NONE.is_match("display: none;"));
        assert!(!DISPLAY_NONE.is_match("display:  none"));
        assert!(!DISPLAY_NONE.is_match("display: block"));
    }
}
