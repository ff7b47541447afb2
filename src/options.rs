/// Configuration options for JSON formatting.
///
/// Use [`Default::default()`] to get the standard settings, then modify
/// individual fields as needed.
///
/// # Example
///
/// ```rust
/// use prettyjson::FormatOptions;
///
/// let mut options = FormatOptions::default();
/// options.indent = 2;
/// options.sort_keys = true;
/// ```
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Number of spaces per indentation level. Ignored when `compact` is set.
    /// Default: 4.
    pub indent: usize,

    /// Sort object keys lexicographically at every nesting level.
    /// Default: false.
    pub sort_keys: bool,

    /// Minify the output: no whitespace outside string literals.
    /// Key order still follows `sort_keys` when both are set.
    /// Default: false.
    pub compact: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            sort_keys: false,
            compact: false,
        }
    }
}
