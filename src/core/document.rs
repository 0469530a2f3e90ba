//! Post records and title derivation for markdown files

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use chrono::{DateTime, SubsecRound, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::{IndexError, Result};

/// One indexed post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Display path, `<content dir>/<filename>`
    pub path: String,
    pub filename: String,
    /// Never empty
    pub title: String,
    pub last_modified: DateTime<Utc>,
    /// Size in bytes
    pub size: u64,
}

impl DocumentRecord {
    /// Build a record from a file on disk
    ///
    /// Fails only if the file's metadata cannot be read. An unreadable body
    /// just falls back to the filename title.
    pub fn from_path(path: &Path, display_prefix: &str) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|source| IndexError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;
        let modified = metadata.modified().map_err(|source| IndexError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

        let filename = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let display_path = if display_prefix.is_empty() {
            filename.clone()
        } else {
            format!("{}/{}", display_prefix, filename)
        };

        Ok(Self {
            path: display_path,
            title: derive_title(path),
            filename,
            last_modified: DateTime::<Utc>::from(modified).trunc_subsecs(6),
            size: metadata.len(),
        })
    }
}

/// Matches `# Title`, allowing indentation before the marker; `\s` is
/// Unicode-aware
fn heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*#\s+(.+)$").expect("heading pattern is valid"))
}

/// Title of a markdown file: its first `# ` heading, or one made from the
/// filename
pub fn derive_title(path: &Path) -> String {
    let filename = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    // Read errors, including invalid UTF-8, are not reported
    fs::read_to_string(path)
        .ok()
        .and_then(|content| heading_title(&content))
        .unwrap_or_else(|| fallback_title(&filename))
}

/// First heading line in `content`, trimmed
pub fn heading_title(content: &str) -> Option<String> {
    let pattern = heading_pattern();
    content.lines().find_map(|line| {
        let line = line.trim_start_matches('\u{feff}');
        pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|title| !title.is_empty())
    })
}

/// Title built from a filename: `my_first-post.md` -> `My First Post`
pub fn fallback_title(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let title = stem
        .replace(['-', '_'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if !title.is_empty() {
        title
    } else if !stem.is_empty() {
        stem
    } else {
        filename.to_string()
    }
}

/// Uppercase the first character, lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
