//! Error types for rs-readability.
//!
//! Node scoring and classification never fail; errors only come from
//! turning raw input into a document.

/// Error type for document construction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be turned into a usable document.
    #[error("HTML parsing failed: {0}")]
    Parse(String),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
