//! # prettyjson
//!
//! An interactive JSON validator and pretty-printer that writes the
//! formatted result to a file.
//!
//! The crate is a thin, strictly linear pipeline:
//!
//! - Text is collected line by line until an `end` sentinel or a blank line
//!   after content ([`collect_input`])
//! - The text is validated and parsed, with line/column diagnostics on
//!   failure ([`parse`])
//! - The value is serialized back out, minified or indented, with optional
//!   key sorting ([`Formatter`])
//! - The result lands in an explicitly named or timestamp-named file, with
//!   an overwrite prompt when the target exists ([`write_with_confirmation`])
//!
//! ## Command-Line Tool
//!
//! This crate includes the `pjson` CLI tool, which runs the whole pipeline
//! against the terminal:
//!
//! ```sh
//! # Install
//! cargo install prettyjson
//!
//! # Paste JSON interactively, write pretty_json_<timestamp>.json
//! pjson
//!
//! # Pipe input, sort keys, choose the output file
//! echo '{"b":1,"a":2}' | pjson --sort-keys -o out.json
//!
//! # Minify
//! pjson --compact < input.json
//! ```
//!
//! Run `pjson --help` for all options.
//!
//! ## Quick Start
//!
//! ```rust
//! use prettyjson::Formatter;
//!
//! let value = prettyjson::parse(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
//!
//! let formatter = Formatter::new();
//! let output = formatter.format(&value).unwrap();
//!
//! println!("{}", output);
//! ```
//!
//! ## Serializing Rust Types
//!
//! Any type implementing [`serde::Serialize`] can be formatted directly:
//!
//! ```rust
//! use prettyjson::Formatter;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Player {
//!     name: String,
//!     scores: Vec<i32>,
//! }
//!
//! let player = Player {
//!     name: "Alice".into(),
//!     scores: vec![95, 87, 92],
//! };
//!
//! let formatter = Formatter::new();
//! let output = formatter.serialize(&player).unwrap();
//! ```
//!
//! ## Configuration
//!
//! Formatting behavior is controlled through [`FormatOptions`]:
//!
//! ```rust
//! use prettyjson::Formatter;
//!
//! let mut formatter = Formatter::new();
//! formatter.options.indent = 2;
//! formatter.options.sort_keys = true;
//!
//! let value = prettyjson::parse(r#"{"b":1,"a":2}"#).unwrap();
//! let output = formatter.format(&value).unwrap();
//! assert_eq!(output, "{\n  \"a\": 2,\n  \"b\": 1\n}");
//! ```

mod error;
mod format;
mod input;
mod options;
mod output;
mod parse;

pub use crate::error::{InputPosition, PrettyJsonError};
pub use crate::format::Formatter;
pub use crate::input::collect_input;
pub use crate::options::FormatOptions;
pub use crate::output::{default_filename, resolve_filename, write_with_confirmation, WriteOutcome};
pub use crate::parse::parse;
