use serde_json::Value;

use crate::error::{InputPosition, PrettyJsonError};

/// Characters of input reported on either side of a parse failure.
const CONTEXT_CHARS: usize = 20;

/// Parses raw text into a JSON value.
///
/// Parsing is delegated to serde_json; object key order is preserved as it
/// appears in the input. On failure the returned error carries the 1-based
/// line and column of the failure plus a snippet of the surrounding text,
/// when serde_json can locate it.
pub fn parse(text: &str) -> Result<Value, PrettyJsonError> {
    serde_json::from_str(text).map_err(|err| locate_error(text, &err))
}

fn locate_error(text: &str, err: &serde_json::Error) -> PrettyJsonError {
    if err.line() == 0 {
        return PrettyJsonError::simple(format!("invalid JSON: {}", err));
    }

    // serde_json appends its own " at line L column C" suffix; strip it so
    // the location is reported once, in our format.
    let raw = err.to_string();
    let description = raw.split(" at line ").next().unwrap_or(raw.as_str());

    let pos = position_of(text, err.line(), err.column());
    PrettyJsonError::new(format!("invalid JSON: {}", description), Some(pos))
        .with_snippet(context_window(text, pos.offset))
}

/// Converts serde_json's 1-based line/column into a byte offset into `text`.
fn position_of(text: &str, line: usize, column: usize) -> InputPosition {
    let mut offset = 0;
    for (idx, l) in text.split('\n').enumerate() {
        if idx + 1 == line {
            offset += column.saturating_sub(1).min(l.len());
            break;
        }
        offset += l.len() + 1;
    }
    InputPosition { offset: offset.min(text.len()), line, column }
}

/// Returns up to [`CONTEXT_CHARS`] characters on either side of `offset`,
/// never splitting a UTF-8 sequence.
fn context_window(text: &str, offset: usize) -> String {
    let mut offset = offset.min(text.len());
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }

    let before: Vec<char> = text[..offset].chars().rev().take(CONTEXT_CHARS).collect();
    let mut window: String = before.into_iter().rev().collect();
    window.extend(text[offset..].chars().take(CONTEXT_CHARS));
    window
}
