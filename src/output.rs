use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use time::OffsetDateTime;

/// Outcome of attempting to write the formatted result.
#[derive(Debug)]
pub enum WriteOutcome {
    /// The file was written; carries the absolute path of the target.
    Written(PathBuf),
    /// The target existed and the user declined to overwrite it.
    Declined,
}

/// Returns the timestamp-derived default filename,
/// `pretty_json_<YYYYMMDD_HHMMSS>.json`, using local time when the local
/// offset can be determined and UTC otherwise.
pub fn default_filename() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format!(
        "pretty_json_{:04}{:02}{:02}_{:02}{:02}{:02}.json",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

/// An explicit output path wins; otherwise the timestamp-derived name is
/// used, relative to the current directory.
pub fn resolve_filename(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_filename()),
    }
}

/// Writes `text` to `path`, asking for confirmation first when the target
/// already exists. Only a case-insensitive `y` response confirms; anything
/// else declines, leaving the existing file untouched.
pub fn write_with_confirmation<R, W>(
    path: &Path,
    text: &str,
    responses: &mut R,
    prompt_out: &mut W,
) -> io::Result<WriteOutcome>
where
    R: BufRead,
    W: Write,
{
    if path.exists() && !confirm_overwrite(path, responses, prompt_out)? {
        return Ok(WriteOutcome::Declined);
    }
    fs::write(path, text)?;
    Ok(WriteOutcome::Written(absolute_path(path)?))
}

fn confirm_overwrite<R, W>(path: &Path, responses: &mut R, prompt_out: &mut W) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(prompt_out, "File '{}' exists. Overwrite? [y/N] ", path.display())?;
    prompt_out.flush()?;

    let mut response = String::new();
    responses.read_line(&mut response)?;
    Ok(response.trim_end_matches(&['\r', '\n'][..]).eq_ignore_ascii_case("y"))
}

fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(absolute) => Ok(absolute),
        Err(_) => Ok(std::env::current_dir()?.join(path)),
    }
}
