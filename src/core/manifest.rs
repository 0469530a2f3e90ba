//! Manifest assembly and output

use std::fs;
use std::path::Path;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::config::IndexConfig;
use super::document::DocumentRecord;
use super::error::{IndexError, Result};
use super::file_system::list_documents;

/// Generation timestamp plus every post, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub generated_at: DateTime<Utc>,
    pub posts: Vec<DocumentRecord>,
}

impl Manifest {
    /// Scan the configured content directory and build a manifest
    pub fn build(config: &IndexConfig) -> Result<Self> {
        let content_dir = config.content_path();
        tracing::debug!("Indexing {}", content_dir.display());

        let prefix = config.display_prefix();
        let mut posts = list_documents(&content_dir, &config.extension)?
            .iter()
            .map(|path| DocumentRecord::from_path(path, &prefix))
            .collect::<Result<Vec<_>>>()?;
        sort_posts(&mut posts);

        Ok(Self {
            generated_at: Utc::now().trunc_subsecs(6),
            posts,
        })
    }

    /// Render as indented JSON with a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut payload = serde_json::to_string_pretty(self)?;
        payload.push('\n');
        Ok(payload)
    }

    /// Replace the manifest file at `path`, returning the number of posts
    /// written
    pub fn write(&self, path: &Path) -> Result<usize> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| IndexError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let payload = self.to_json()?;

        let write_err = |source| IndexError::Write {
            path: path.to_path_buf(),
            source,
        };
        if path.exists() {
            fs::remove_file(path).map_err(write_err)?;
        }
        fs::write(path, payload).map_err(write_err)?;

        tracing::info!("Saved manifest to: {}", path.display());
        Ok(self.posts.len())
    }
}

/// Newest first; equal timestamps fall back to reverse filename order
pub fn sort_posts(posts: &mut [DocumentRecord]) {
    posts.sort_by(|a, b| {
        b.last_modified
            .cmp(&a.last_modified)
            .then_with(|| b.filename.cmp(&a.filename))
    });
}
