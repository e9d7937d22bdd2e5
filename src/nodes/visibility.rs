//! Visibility and whitespace tests.
//!
//! Nothing is rendered, so visibility only looks at inline signals: a
//! `display: none` style and the `hidden` attribute.

use dom_query::NodeRef;

use crate::dom;
use crate::patterns::DISPLAY_NONE;

/// Check whether the node is probably visible.
#[must_use]
pub fn is_probably_visible(node: &NodeRef) -> bool {
    !DISPLAY_NONE.is_match(&dom::attribute(node, "style")) && !dom::has_attribute(node, "hidden")
}

/// Check whether the node is blank text or a `br`.
#[must_use]
pub fn is_whitespace(node: &NodeRef) -> bool {
    (node.is_text() && dom::trim(&dom::text_content(node)).is_empty()) || dom::has_tag(node, "br")
}
