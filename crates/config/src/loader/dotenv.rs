//! `.env` file parsing for configuration.
//!
//! Responsibilities:
//! - Parse `KEY=value` lines with full-line `#` comments and single-layer quote stripping.
//! - Apply recognized keys to a `ConfigLoader` with the same mapping as the environment.
//!
//! Invariants:
//! - A missing file is not an error.
//! - Malformed lines (no `=`) and unknown keys are skipped silently.
//! - The file is only read; the process environment is never touched here.
//! - When a key repeats, the last assignment wins.
//! - Parsed by hand rather than with `dotenvy`: no `$VAR` substitution, no escapes,
//!   no multi-line values, and nothing is exported to the process environment.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::builder::ConfigLoader;
use super::env::apply_values;
use super::error::ConfigError;

/// Parse `.env` contents into a key/value map.
pub(crate) fn parse_dotenv(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .filter_map(parse_line)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Parse one line, returning `None` for blanks, comments, and lines without `=`.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), strip_quotes(value.trim())))
}

/// Strip one layer of matching `"` or `'` quotes.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Apply `.env` file configuration to the loader.
///
/// Returns `Ok(())` without changes when the file does not exist.
pub(crate) fn apply_dotenv(loader: &mut ConfigLoader, path: &Path) -> Result<(), ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no .env file found, skipping");
            return Ok(());
        }
        Err(e) => {
            return Err(ConfigError::DotenvIo {
                path: path.to_path_buf(),
                kind: e.kind(),
            });
        }
    };

    let values = parse_dotenv(&contents);
    let applied = apply_values(loader, |key| values.get(key).cloned());
    tracing::debug!(path = %path.display(), applied, "loaded .env file");

    Ok(())
}
