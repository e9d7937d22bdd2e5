//! # rs-readability
//!
//! Node scoring and classification primitives for readability-style content
//! extraction.
//!
//! A candidate selector walks a parsed HTML document and asks these
//! functions how much each node looks like article content: a tag-based
//! base score, class/id keyword weighting, link density, table size,
//! phrasing/block classification and inline visibility.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readability::{dom, nodes, Options, ScoreBoard};
//!
//! let html = r#"<html><body>
//!     <div id="main-content" class="sidebar"><p>Main content here.</p></div>
//! </body></html>"#;
//!
//! let doc = dom::parse(html)?;
//! let div = doc.select("div").nodes()[0];
//!
//! let mut board = ScoreBoard::new();
//! let score = board.initialize_with_options(&div, &Options::default());
//! assert_eq!(score, 5);
//! assert_eq!(nodes::class_weight(&div), 0);
//! assert!(nodes::is_probably_visible(&div));
//! # Ok::<(), rs_readability::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Scoring**: idempotent base scores per tag plus class/id weighting
//! - **Metrics**: normalized text, link density, table rows/columns
//! - **Classification**: phrasing content, block children, empty elements
//! - **Visibility**: inline `display: none` and `hidden` checks

mod error;
mod options;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Compiled keyword and text patterns.
pub mod patterns;

/// Per-node scoring and classification.
pub mod nodes;

// Public API - re-exports
pub use error::{Error, Result};
pub use nodes::{NodeState, ScoreBoard, TableSize};
pub use options::Options;
