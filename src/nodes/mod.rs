//! Per-node scoring and classification.
//!
//! Free functions over `dom_query::NodeRef` handles, plus a `ScoreBoard`
//! holding the mutable per-node state (content score, initialized flag,
//! data-table flag).
//!
//! # Module Structure
//!
//! - `tags`: Tag catalogs and the base score table
//! - `score`: `ScoreBoard` and class/id weighting
//! - `metrics`: Text, link density and table measurements
//! - `structure`: Ancestry, children and content-model predicates
//! - `visibility`: Inline visibility and whitespace tests
//!
//! # Usage
//!
//! ```rust
//! use rs_readability::dom;
//! use rs_readability::nodes::{self, ScoreBoard};
//!
//! let doc = dom::parse(r#"<div class="post"><p>Hello <a href="/">World</a></p></div>"#)?;
//! let div = doc.select("div").nodes()[0];
//!
//! let mut board = ScoreBoard::new();
//! assert_eq!(board.initialize_score(&div, true), 30);
//! assert!(nodes::link_density(&div) > 0.4);
//! assert!(!nodes::is_phrasing_content(&div));
//! # Ok::<(), rs_readability::Error>(())
//! ```

pub mod metrics;
pub mod score;
pub mod structure;
pub mod tags;
pub mod visibility;

pub use metrics::{all_links, link_density, row_and_column_count, text_content, text_length, TableSize};
pub use score::{class_weight, NodeState, ScoreBoard};
pub use structure::{
    ancestors, children, create_element_from_text, has_ancestor_tag, has_single_child_block_element,
    has_single_tag_inside_element, is_element_without_content, is_phrasing_content,
};
pub use tags::{DEFAULT_ANCESTOR_DEPTH, MAX_RECURSION_DEPTH};
pub use visibility::{is_probably_visible, is_whitespace};
