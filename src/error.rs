use std::fmt::{self, Display};

/// A position within the JSON input text.
///
/// Used to report where a parse failure was detected. `line` and `column`
/// are 1-based, matching what the diagnostics print; `offset` is the byte
/// offset from the start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPosition {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// Line number (1-based).
    pub line: usize,
    /// Column number within the line (1-based).
    pub column: usize,
}

/// Error type for everything that can go wrong while parsing or formatting.
///
/// Syntax errors carry the position of the failure and a short snippet of
/// the surrounding input text; other failures carry only a message.
#[derive(Debug, Clone)]
pub struct PrettyJsonError {
    pub message: String,
    pub position: Option<InputPosition>,
    /// Up to 20 characters of input on either side of the failure offset.
    pub snippet: Option<String>,
}

impl PrettyJsonError {
    pub fn new(message: impl Into<String>, pos: Option<InputPosition>) -> Self {
        let message = message.into();
        let message = if let Some(p) = pos {
            format!("{} at line {}, column {}", message, p.line, p.column)
        } else {
            message
        };
        Self { message, position: pos, snippet: None }
    }

    pub fn simple(message: impl Into<String>) -> Self {
        Self::new(message, None)
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

impl Display for PrettyJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PrettyJsonError {}
