//! Text, link and table measurements.

use dom_query::NodeRef;

use crate::dom;
use crate::patterns::REPEATED_WHITESPACE;

/// Row and column counts of a table-like node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSize {
    pub rows: usize,
    pub columns: usize,
}

/// Text of the node and its descendants.
///
/// With `normalize`, runs of two or more whitespace characters collapse to a
/// single space and the result is trimmed.
#[must_use]
pub fn text_content(node: &NodeRef, normalize: bool) -> String {
    let text = dom::text_content(node);
    if normalize {
        dom::trim(&REPEATED_WHITESPACE.replace_all(&text, " ")).to_string()
    } else {
        text.to_string()
    }
}

/// Character count of the normalized text.
#[must_use]
pub fn text_length(node: &NodeRef) -> usize {
    text_content(node, true).chars().count()
}

/// All descendant links.
#[must_use]
pub fn all_links<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    dom::elements_by_tag_name(node, "a")
}

/// Share of the node's text that sits inside links, in `[0, 1]`.
///
/// Returns 0 for nodes without text.
#[must_use]
pub fn link_density(node: &NodeRef) -> f64 {
    let total = text_length(node);
    if total == 0 {
        return 0.0;
    }

    let link_length: usize = all_links(node).iter().map(text_length).sum();

    link_length as f64 / total as f64
}

/// Count rows and columns of a table.
///
/// Rows add up `rowspan` and columns add up `colspan` per row, keeping the
/// widest row. A span that is missing, unparsable or zero counts as 1.
#[must_use]
pub fn row_and_column_count(node: &NodeRef) -> TableSize {
    let mut size = TableSize::default();

    for row in dom::elements_by_tag_name(node, "tr") {
        size.rows = size.rows.saturating_add(span(&row, "rowspan", MAX_ROWSPAN));

        let columns_in_row = dom::elements_by_tag_name(&row, "td")
            .iter()
            .map(|cell| span(cell, "colspan", MAX_COLSPAN))
            .fold(0usize, usize::saturating_add);
        size.columns = size.columns.max(columns_in_row);
    }

    size
}

/// Largest `rowspan` a browser honours.
const MAX_ROWSPAN: usize = 65534;

/// Largest `colspan` a browser honours.
const MAX_COLSPAN: usize = 1000;

/// Span attribute value, falling back to 1 and capped at `max`.
///
/// Leading digits are read the way browsers read `parseInt`, so "2px" is 2.
fn span(node: &NodeRef, name: &str, max: usize) -> usize {
    let value = dom::attribute(node, name);
    let digits: String = dom::trim(&value)
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    if digits.is_empty() || digits.bytes().all(|b| b == b'0') {
        return 1;
    }
    // too many digits for usize is still a huge span
    digits.parse::<usize>().map_or(max, |n| n.min(max))
}
