use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::error::PrettyJsonError;
use crate::options::FormatOptions;

/// Serializes JSON values according to a set of [`FormatOptions`].
///
/// # Example
///
/// ```rust
/// use prettyjson::Formatter;
///
/// let value = prettyjson::parse(r#"{"name":"Alice","active":true}"#).unwrap();
///
/// let formatter = Formatter::new();
/// let output = formatter.format(&value).unwrap();
/// assert!(output.contains("    \"name\": \"Alice\""));
/// ```
pub struct Formatter {
    pub options: FormatOptions,
}

impl Formatter {
    pub fn new() -> Self {
        Self { options: FormatOptions::default() }
    }

    /// Formats a parsed JSON value as text.
    ///
    /// Compact mode emits no whitespace outside string literals; otherwise
    /// the value is indented by `options.indent` spaces per level. With
    /// `sort_keys`, object keys are sorted lexicographically at every
    /// nesting level in either mode.
    pub fn format(&self, value: &Value) -> Result<String, PrettyJsonError> {
        if self.options.sort_keys {
            let mut sorted = value.clone();
            sort_object_keys(&mut sorted);
            self.render(&sorted)
        } else {
            self.render(value)
        }
    }

    /// Formats any serializable value by converting it to a JSON value first.
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String, PrettyJsonError> {
        let value = serde_json::to_value(value)
            .map_err(|err| PrettyJsonError::simple(format!("cannot represent value as JSON: {}", err)))?;
        self.format(&value)
    }

    fn render(&self, value: &Value) -> Result<String, PrettyJsonError> {
        if self.options.compact {
            return serde_json::to_string(value)
                .map_err(|err| PrettyJsonError::simple(format!("cannot serialize value: {}", err)));
        }

        let indent = vec![b' '; self.options.indent];
        let mut out = Vec::new();
        let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
        value
            .serialize(&mut ser)
            .map_err(|err| PrettyJsonError::simple(format!("cannot serialize value: {}", err)))?;
        String::from_utf8(out)
            .map_err(|err| PrettyJsonError::simple(format!("serialized JSON is not UTF-8: {}", err)))
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorts object keys lexicographically, recursing through arrays and nested
/// objects. Array element order is left untouched.
fn sort_object_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            for (_, child) in &mut entries {
                sort_object_keys(child);
            }
            *map = entries.into_iter().collect();
        }
        Value::Array(items) => {
            for item in items {
                sort_object_keys(item);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use pretty_assertions::assert_eq;

    fn formatter(apply: impl FnOnce(&mut FormatOptions)) -> Formatter {
        let mut formatter = Formatter::new();
        apply(&mut formatter.options);
        formatter
    }

    #[test]
    fn pretty_uses_four_space_indent_by_default() {
        let value = parse(r#"{"name":"Alice","scores":[95,87]}"#).unwrap();
        let output = Formatter::new().format(&value).unwrap();
        assert_eq!(
            output,
            "{\n    \"name\": \"Alice\",\n    \"scores\": [\n        95,\n        87\n    ]\n}"
        );
    }

    #[test]
    fn indent_width_is_configurable() {
        let value = parse(r#"{"a":1}"#).unwrap();
        let output = formatter(|o| o.indent = 2).format(&value).unwrap();
        assert_eq!(output, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn zero_indent_still_breaks_lines() {
        let value = parse("[1,2]").unwrap();
        let output = formatter(|o| o.indent = 0).format(&value).unwrap();
        assert_eq!(output, "[\n1,\n2\n]");
    }

    #[test]
    fn compact_has_no_whitespace_outside_strings() {
        let value = parse(r#"{"a b": "c d", "xs": [1, 2, {"k": null}]}"#).unwrap();
        let output = formatter(|o| o.compact = true).format(&value).unwrap();
        assert_eq!(output, r#"{"a b":"c d","xs":[1,2,{"k":null}]}"#);

        let mut in_string = false;
        let mut escaped = false;
        for ch in output.chars() {
            match ch {
                _ if escaped => escaped = false,
                '\\' if in_string => escaped = true,
                '"' => in_string = !in_string,
                _ if !in_string => assert!(!ch.is_whitespace(), "whitespace outside string"),
                _ => {}
            }
        }
    }

    #[test]
    fn sort_keys_orders_every_nesting_level() {
        let value = parse(r#"{"b":{"z":1,"y":2},"a":[{"d":3,"c":4}]}"#).unwrap();
        let output = formatter(|o| o.sort_keys = true).format(&value).unwrap();
        assert_eq!(
            output,
            "{\n    \"a\": [\n        {\n            \"c\": 4,\n            \"d\": 3\n        }\n    ],\n    \"b\": {\n        \"y\": 2,\n        \"z\": 1\n    }\n}"
        );
    }

    #[test]
    fn compact_honors_sort_keys() {
        let value = parse(r#"{"b":1,"a":2}"#).unwrap();
        let output = formatter(|o| {
            o.compact = true;
            o.sort_keys = true;
        })
        .format(&value)
        .unwrap();
        assert_eq!(output, r#"{"a":2,"b":1}"#);
    }

    #[test]
    fn unsorted_output_preserves_input_key_order() {
        let value = parse(r#"{"zebra":1,"apple":2}"#).unwrap();
        let output = formatter(|o| o.compact = true).format(&value).unwrap();
        assert_eq!(output, r#"{"zebra":1,"apple":2}"#);
    }

    #[test]
    fn non_ascii_passes_through_unescaped() {
        let value = parse(r#"{"greeting":"héllo ✓"}"#).unwrap();
        let output = Formatter::new().format(&value).unwrap();
        assert!(output.contains("héllo ✓"));
        assert!(!output.contains("\\u"));
    }

    #[test]
    fn format_then_reparse_is_deep_equal() {
        let input = r#"{"nums":[1,2.5,-3],"nested":{"t":true,"n":null},"s":"text"}"#;
        let value = parse(input).unwrap();
        for opts in [
            FormatOptions::default(),
            FormatOptions { compact: true, ..FormatOptions::default() },
            FormatOptions { sort_keys: true, ..FormatOptions::default() },
        ] {
            let formatter = Formatter { options: opts };
            let output = formatter.format(&value).unwrap();
            assert_eq!(parse(&output).unwrap(), value);
        }
    }

    #[test]
    fn serializes_rust_types_directly() {
        #[derive(Serialize)]
        struct Player {
            name: String,
            scores: Vec<i32>,
        }

        let player = Player { name: "Alice".into(), scores: vec![95, 87] };
        let output = formatter(|o| o.compact = true).serialize(&player).unwrap();
        assert_eq!(output, r#"{"name":"Alice","scores":[95,87]}"#);
    }
}
