use std::io::{self, BufRead};

/// Collects raw JSON text from a line source.
///
/// Reads lines until one of:
///
/// - a sentinel line equal to `end` (case-insensitive, no trimming);
/// - a blank line (empty or whitespace-only) after at least one non-blank
///   line has been collected — blank lines before any content are skipped;
/// - end of input.
///
/// Returns the collected lines joined with `\n`. Blank lines are never part
/// of the result, so an empty string means no input was received.
pub fn collect_input<R: BufRead>(reader: R) -> io::Result<String> {
    let mut lines: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.eq_ignore_ascii_case("end") {
            break;
        }
        if line.trim().is_empty() {
            if !lines.is_empty() {
                break;
            }
            continue;
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(text: &str) -> String {
        collect_input(Cursor::new(text)).unwrap()
    }

    #[test]
    fn stops_at_sentinel_case_insensitive() {
        assert_eq!(collect("{\"a\": 1}\nEND\n{\"b\": 2}\n"), "{\"a\": 1}");
        assert_eq!(collect("{}\nEnd\n"), "{}");
        assert_eq!(collect("{}\nend\n"), "{}");
    }

    #[test]
    fn sentinel_requires_exact_line() {
        // A line that merely contains "end" is ordinary content.
        assert_eq!(collect("[\"end of story\"]\n\n"), "[\"end of story\"]");
        assert_eq!(collect("  end\nstill here\n"), "  end\nstill here");
    }

    #[test]
    fn blank_line_terminates_after_content() {
        assert_eq!(collect("{\n\"a\": 1\n}\n\ntrailing\n"), "{\n\"a\": 1\n}");
    }

    #[test]
    fn leading_blank_lines_are_skipped() {
        assert_eq!(collect("\n\n   \n{\"a\": 1}\n\n"), "{\"a\": 1}");
    }

    #[test]
    fn whitespace_only_line_counts_as_blank() {
        assert_eq!(collect("[1]\n   \t\n[2]\n"), "[1]");
    }

    #[test]
    fn eof_terminates_without_error() {
        assert_eq!(collect("{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(collect(""), "");
        assert_eq!(collect("\n\n\n"), "");
        assert_eq!(collect("end\n"), "");
    }
}
