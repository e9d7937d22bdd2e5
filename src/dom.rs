//! DOM Operations Adapter
//!
//! Thin layer over `dom_query` node handles. Every lookup degrades to a safe
//! default (empty string, `false`, `None`) instead of failing, so the scoring
//! code never has to care which kind of node it was handed.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use crate::error::{Error, Result};

// === Parsing ===

/// Parse an HTML string into a document.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the input is empty or whitespace-only;
/// there is nothing a scorer could work on in that case.
pub fn parse(html: &str) -> Result<Document> {
    if html.trim().is_empty() {
        tracing::debug!(len = html.len(), "rejecting empty HTML input");
        return Err(Error::Parse("document is empty".to_string()));
    }
    Ok(Document::from(html))
}

// === Attribute Operations ===

/// Get an attribute value, or an empty string when the attribute is missing
/// or the node has no attributes at all (text, comment, document).
#[must_use]
pub fn attribute(node: &NodeRef, name: &str) -> String {
    if !node.is_element() {
        return String::new();
    }
    node.attr(name).map(|s| s.to_string()).unwrap_or_default()
}

/// Check if an attribute exists. Non-element nodes never have attributes.
#[inline]
#[must_use]
pub fn has_attribute(node: &NodeRef, name: &str) -> bool {
    node.is_element() && node.has_attr(name)
}

// === Tag/Node Information ===

/// Get the lowercase tag name of an element; `None` for other node kinds.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Check whether the node is an element with the given tag name.
#[must_use]
pub fn has_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element() && node.node_name().is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

// === Text Content ===

/// Get all text of the node and its descendants.
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Trim the whitespace characters HTML text treats as blank: space, tab,
/// newline, carriage return, vertical tab and NUL.
///
/// Unlike `str::trim`, non-breaking spaces are kept, so `&nbsp;` counts as
/// content.
#[must_use]
pub fn trim(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\0'))
}

// === Tree Navigation ===

/// Get all descendant elements with the given tag name, in document order.
#[must_use]
pub fn elements_by_tag_name<'a>(node: &NodeRef<'a>, tag: &str) -> Vec<NodeRef<'a>> {
    node.descendants()
        .into_iter()
        .filter(|n| has_tag(n, tag))
        .collect()
}

// === Tree Manipulation ===

/// Create a detached element owned by the same document as `node`, with the
/// given text as its only content.
#[must_use]
pub fn create_element<'a>(node: &NodeRef<'a>, tag: &str, text: &str) -> NodeRef<'a> {
    let element = node.tree.new_element(tag);
    element.set_text(text);
    element
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(doc: &'a Document, selector: &str) -> NodeRef<'a> {
        doc.select(selector).nodes()[0]
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(parse(""), Err(Error::Parse(_))));
        assert!(matches!(parse("  \n\t"), Err(Error::Parse(_))));
        assert!(parse("<p>hello</p>").is_ok());
    }

    #[test]
    fn test_attribute_defaults_to_empty() {
        let doc = Document::from(r#"<div id="main">text</div>"#);
        let div = first(&doc, "div");

        assert_eq!(attribute(&div, "id"), "main");
        assert_eq!(attribute(&div, "class"), "");
    }

    #[test]
    fn test_text_nodes_have_no_attributes() {
        let doc = Document::from(r#"<div id="main">text</div>"#);
        let div = first(&doc, "div");
        let text = div.first_child().unwrap();

        assert!(text.is_text());
        assert_eq!(attribute(&text, "id"), "");
        assert!(!has_attribute(&text, "id"));
        assert_eq!(tag_name(&text), None);
    }

    #[test]
    fn test_has_attribute_without_value() {
        let doc = Document::from(r#"<div hidden>text</div>"#);
        let div = first(&doc, "div");

        assert!(has_attribute(&div, "hidden"));
        assert!(!has_attribute(&div, "style"));
    }

    #[test]
    fn test_tag_name() {
        let doc = Document::from(r#"<article><section>content</section></article>"#);

        assert_eq!(tag_name(&first(&doc, "article")), Some("article".to_string()));
        assert!(has_tag(&first(&doc, "section"), "section"));
        assert!(!has_tag(&first(&doc, "section"), "article"));
    }

    #[test]
    fn test_trim_keeps_nbsp() {
        assert_eq!(trim(" \t\n text \r\x0B"), "text");
        assert_eq!(trim("\u{a0}"), "\u{a0}");
        assert_eq!(trim("  "), "");
    }

    #[test]
    fn test_elements_by_tag_name_in_document_order() {
        let doc = Document::from(r#"<div><a id="one">1</a><p><a id="two">2</a></p></div>"#);
        let div = first(&doc, "div");

        let links = elements_by_tag_name(&div, "a");
        let ids: Vec<String> = links.iter().map(|a| attribute(a, "id")).collect();
        assert_eq!(ids, vec!["one", "two"]);
    }

    #[test]
    fn test_create_element_is_detached() {
        let doc = Document::from(r#"<div>source text</div>"#);
        let div = first(&doc, "div");

        let created = create_element(&div, "p", "source text");
        assert!(has_tag(&created, "p"));
        assert_eq!(text_content(&created).to_string(), "source text");
        assert!(created.parent().is_none());
        assert_eq!(doc.select("p").length(), 0);
    }
}
