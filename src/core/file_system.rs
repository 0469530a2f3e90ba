//! Content directory enumeration

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::error::{IndexError, Result};

/// Check whether a file name ends in `.<extension>` (case-sensitive)
///
/// A bare `.md` counts, unlike with `Path::extension`.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(extension))
        .map(|rest| rest.ends_with('.'))
        .unwrap_or(false)
}

/// Get the regular files directly inside `dir` with the given extension
///
/// Symlinks are followed, so a link to a post counts as a post. Entries that
/// cannot be inspected are skipped; failing to list `dir` itself is fatal.
pub fn list_documents(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IndexError::ContentDirMissing(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(IndexError::ListDir {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_extension(entry.path(), extension) {
            continue;
        }
        files.push(entry.into_path());
    }

    files.sort();
    tracing::debug!("Found {} .{} files in {}", files.len(), extension, dir.display());
    Ok(files)
}
