//! Tag catalogs used by node scoring and classification.
//!
//! Provides both arrays (for iteration) and `HashSets` (for O(1) lookup).

use std::collections::HashSet;
use std::sync::LazyLock;

// === Base Score Tag Lists ===

/// Tags that usually wrap article text: +5
pub static CONTENT_CONTAINER_TAGS: [&str; 1] = ["div"];

/// Tags that often hold content: +3
pub static CONTENT_HINT_TAGS: [&str; 3] = ["pre", "td", "blockquote"];

/// List and form tags: -3
pub static LIST_AND_FORM_TAGS: [&str; 8] = ["address", "ol", "ul", "dl", "dd", "dt", "li", "form"];

/// Heading and table header tags: -5
pub static HEADING_TAGS: [&str; 7] = ["h1", "h2", "h3", "h4", "h5", "h6", "th"];

// === Classification Tag Lists ===

/// Block-level tags that keep a `div` from being turned into a paragraph.
pub static BLOCK_TAGS: [&str; 11] = [
    "a", "blockquote", "dl", "div", "img", "ol", "p", "pre", "table", "ul", "select",
];

/// Phrasing content elements.
///
/// `canvas`, `iframe`, `svg` and `video` qualify as phrasing content too, but
/// they are left out because paragraphs built around them get removed later.
pub static PHRASING_TAGS: [&str; 39] = [
    "abbr", "audio", "b", "bdo", "br", "button", "cite", "code", "data", "datalist", "dfn",
    "em", "embed", "i", "img", "input", "kbd", "label", "mark", "math", "meter", "noscript",
    "object", "output", "progress", "q", "ruby", "samp", "script", "select", "small", "span",
    "strong", "sub", "sup", "textarea", "time", "var", "wbr",
];

/// Wrappers that are phrasing content only when all their children are.
pub static PHRASING_WRAPPER_TAGS: [&str; 3] = ["a", "del", "ins"];

// === Tag Sets (HashSets for O(1) lookup) ===

/// `BLOCK_TAGS` as a `HashSet`
pub static BLOCK_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BLOCK_TAGS.into_iter().collect());

/// `PHRASING_TAGS` as a `HashSet`
pub static PHRASING_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PHRASING_TAGS.into_iter().collect());

// === Limits ===

/// Depth bound for `is_phrasing_content`, the one recursive predicate.
pub const MAX_RECURSION_DEPTH: usize = 64;

/// Default hop limit for `has_ancestor_tag`.
pub const DEFAULT_ANCESTOR_DEPTH: usize = 3;

// === Helper Functions ===

/// Base content score for a tag name.
#[must_use]
pub fn base_score(tag: &str) -> i32 {
    if CONTENT_CONTAINER_TAGS.contains(&tag) {
        5
    } else if CONTENT_HINT_TAGS.contains(&tag) {
        3
    } else if LIST_AND_FORM_TAGS.contains(&tag) {
        -3
    } else if HEADING_TAGS.contains(&tag) {
        -5
    } else {
        0
    }
}

/// Check if tag is a block tag
#[inline]
#[must_use]
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAG_SET.contains(tag)
}

/// Check if tag is a phrasing tag
#[inline]
#[must_use]
pub fn is_phrasing_tag(tag: &str) -> bool {
    PHRASING_TAG_SET.contains(tag)
}

/// Check if tag is a phrasing wrapper (`a`, `del`, `ins`)
#[inline]
#[must_use]
pub fn is_phrasing_wrapper_tag(tag: &str) -> bool {
    PHRASING_WRAPPER_TAGS.contains(&tag)
}
