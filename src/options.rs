//! Configuration options for node scoring.

/// Configuration options for node scoring.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readability::Options;
///
/// let options = Options {
///     weight_classes: false,
///     ..Options::default()
/// };
/// assert!(!options.weight_classes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Add the class/id keyword weight to a node's base score when it is
    /// initialized.
    ///
    /// Default: `true`
    pub weight_classes: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            weight_classes: true,
        }
    }
}
