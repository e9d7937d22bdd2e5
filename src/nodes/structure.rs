//! Structural classification: ancestry, children and content models.

use dom_query::NodeRef;

use super::metrics::text_content;
use super::tags::{is_block_tag, is_phrasing_tag, is_phrasing_wrapper_tag, MAX_RECURSION_DEPTH};
use crate::dom;
use crate::patterns::{ONLY_WHITESPACE, TRAILING_CONTENT};

/// Ancestors of a node, nearest first, never including the document node.
///
/// `max_depth` limits how many are collected; `None` and `Some(0)` collect
/// all of them.
#[must_use]
pub fn ancestors<'a>(node: &NodeRef<'a>, max_depth: Option<usize>) -> Vec<NodeRef<'a>> {
    let limit = max_depth.filter(|&depth| depth > 0);
    let mut found = Vec::new();

    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.is_document() {
            break;
        }
        found.push(parent);
        if limit.is_some_and(|limit| found.len() >= limit) {
            break;
        }
        current = parent.parent();
    }

    found
}

/// Check whether an ancestor has the given tag name.
///
/// The hop counter starts at 0 on the parent and the walk gives up once it
/// exceeds `max_depth`, so `max_depth + 1` ancestors are examined. A
/// `max_depth` of 0 searches all the way up.
#[must_use]
pub fn has_ancestor_tag(node: &NodeRef, tag: &str, max_depth: usize) -> bool {
    let mut depth = 0;
    let mut current = *node;

    while let Some(parent) = current.parent() {
        if max_depth > 0 && depth > max_depth {
            return false;
        }
        if dom::has_tag(&parent, tag) {
            return true;
        }
        current = parent;
        depth += 1;
    }

    false
}

/// Direct children in document order.
///
/// With `filter_empty_text`, text children that are blank after trimming
/// are dropped. Other children are always kept.
#[must_use]
pub fn children<'a>(node: &NodeRef<'a>, filter_empty_text: bool) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(|child| !filter_empty_text || !is_blank_text(child))
        .collect()
}

fn is_blank_text(node: &NodeRef) -> bool {
    node.is_text() && dom::trim(&dom::text_content(node)).is_empty()
}

/// Check whether the node holds exactly one `tag` element and nothing but
/// whitespace around it.
#[must_use]
pub fn has_single_tag_inside_element(node: &NodeRef, tag: &str) -> bool {
    let filtered = children(node, true);
    if filtered.len() != 1 || !dom::has_tag(&filtered[0], tag) {
        return false;
    }

    !node
        .children()
        .iter()
        .any(|child| child.is_text() && TRAILING_CONTENT.is_match(&dom::text_content(child)))
}

/// Check whether any descendant, at any depth, is a block element.
#[must_use]
pub fn has_single_child_block_element(node: &NodeRef) -> bool {
    node.descendants()
        .iter()
        .any(|n| dom::tag_name(n).is_some_and(|tag| is_block_tag(&tag)))
}

/// Check whether an element is empty or only holds whitespace, `br` and `hr`.
#[must_use]
pub fn is_element_without_content(node: &NodeRef) -> bool {
    if !node.is_element() || !ONLY_WHITESPACE.is_match(&dom::text_content(node)) {
        return false;
    }

    let children = node.children();
    let breaks = dom::elements_by_tag_name(node, "br").len() + dom::elements_by_tag_name(node, "hr").len();
    // text children are known blank at this point
    let text_children = children.iter().filter(|child| child.is_text()).count();

    children.len() == breaks + text_children
}

/// Check whether the node is phrasing content.
///
/// Text nodes and the phrasing elements qualify directly; `a`, `del` and
/// `ins` qualify when all of their children do.
#[must_use]
pub fn is_phrasing_content(node: &NodeRef) -> bool {
    is_phrasing_at_depth(node, 0)
}

fn is_phrasing_at_depth(node: &NodeRef, depth: usize) -> bool {
    if node.is_text() {
        return true;
    }
    let Some(tag) = dom::tag_name(node) else {
        return false;
    };
    if is_phrasing_tag(&tag) {
        return true;
    }

    is_phrasing_wrapper_tag(&tag)
        && depth < MAX_RECURSION_DEPTH
        && node
            .children()
            .iter()
            .all(|child| is_phrasing_at_depth(child, depth + 1))
}

/// Create a detached `tag` element in the node's document carrying the
/// node's raw text.
#[must_use]
pub fn create_element_from_text<'a>(node: &NodeRef<'a>, tag: &str) -> NodeRef<'a> {
    dom::create_element(node, tag, &text_content(node, false))
}
