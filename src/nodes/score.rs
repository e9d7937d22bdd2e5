//! Content score state and class/id weighting.
//!
//! Score state is kept in a `ScoreBoard` side table keyed by `NodeId`
//! instead of on the DOM nodes themselves. A node the board has never seen
//! reads as the default state.

use std::collections::HashMap;

use dom_query::{NodeId, NodeRef};

use super::tags;
use crate::dom;
use crate::patterns::{NEGATIVE, POSITIVE};
use crate::Options;

/// Per-node scoring state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeState {
    /// Heuristic content score.
    pub content_score: i32,
    /// Whether the base score has been computed.
    pub initialized: bool,
    /// Whether the node is a table holding tabular data (set externally).
    pub data_table: bool,
}

/// Scoring state for the nodes of one document.
///
/// Node ids are only unique within a document, so use one board per parsed
/// document.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    states: HashMap<NodeId, NodeState>,
}

impl ScoreBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the node's base score from its tag, plus its class weight when
    /// `weight_classes` is set.
    ///
    /// Only the first call per node does any work; later calls return the
    /// current score unchanged, even if the assembler has adjusted it since.
    pub fn initialize_score(&mut self, node: &NodeRef, weight_classes: bool) -> i32 {
        let state = self.states.entry(node.id).or_default();
        if state.initialized {
            return state.content_score;
        }

        let tag = dom::tag_name(node);
        let base = tag.as_deref().map_or(0, tags::base_score);
        let weight = if weight_classes { class_weight(node) } else { 0 };

        state.content_score = base + weight;
        state.initialized = true;

        tracing::trace!(
            tag = tag.as_deref().unwrap_or("#node"),
            base,
            weight,
            score = state.content_score,
            "initialized node score"
        );

        state.content_score
    }

    /// [`initialize_score`](Self::initialize_score) with the weighting taken
    /// from `options`.
    pub fn initialize_with_options(&mut self, node: &NodeRef, options: &Options) -> i32 {
        self.initialize_score(node, options.weight_classes)
    }

    /// Current state of a node.
    #[must_use]
    pub fn state(&self, node: &NodeRef) -> NodeState {
        self.states.get(&node.id).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_initialized(&self, node: &NodeRef) -> bool {
        self.state(node).initialized
    }

    #[must_use]
    pub fn content_score(&self, node: &NodeRef) -> i32 {
        self.state(node).content_score
    }

    /// Overwrite the content score. Does not mark the node initialized.
    pub fn set_content_score(&mut self, node: &NodeRef, score: i32) {
        self.states.entry(node.id).or_default().content_score = score;
    }

    /// Add `delta` to the content score and return the new value.
    pub fn add_content_score(&mut self, node: &NodeRef, delta: i32) -> i32 {
        let state = self.states.entry(node.id).or_default();
        state.content_score += delta;
        state.content_score
    }

    #[must_use]
    pub fn is_data_table(&self, node: &NodeRef) -> bool {
        self.state(node).data_table
    }

    /// Record the outcome of table classification for a node.
    pub fn set_data_table(&mut self, node: &NodeRef, data_table: bool) {
        tracing::trace!(node = ?node.id, data_table, "data table flag set");
        self.states.entry(node.id).or_default().data_table = data_table;
    }

    /// Number of nodes with recorded state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Forget all recorded state.
    pub fn clear(&mut self) {
        self.states.clear();
    }
}

/// Weight of a node's class and id.
///
/// Each attribute is checked on its own: a non-blank value loses 25 when it
/// matches a negative keyword and gains 25 when it matches a positive one.
/// Both can apply to the same value.
#[must_use]
pub fn class_weight(node: &NodeRef) -> i32 {
    ["class", "id"]
        .iter()
        .map(|name| keyword_weight(&dom::attribute(node, name)))
        .sum()
}

fn keyword_weight(value: &str) -> i32 {
    if dom::trim(value).is_empty() {
        return 0;
    }

    let mut weight = 0;
    if NEGATIVE.is_match(value) {
        weight -= 25;
    }
    if POSITIVE.is_match(value) {
        weight += 25;
    }
    weight
}
