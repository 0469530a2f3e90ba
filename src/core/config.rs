//! Index configuration

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{IndexError, Result};

/// Where to read posts from and where to write the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Project root; manifest paths are displayed relative to it
    pub root: PathBuf,
    /// Content directory, relative to `root`
    pub content_dir: PathBuf,
    /// Manifest file, relative to `root`
    pub output: PathBuf,
    /// Extension of indexed files, without the dot
    pub extension: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            content_dir: PathBuf::from("blogs"),
            output: PathBuf::from("blogs").join("index.json"),
            extension: "md".to_string(),
        }
    }
}

impl IndexConfig {
    /// Load configuration from a JSON file; missing fields take the defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| IndexError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| IndexError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Absolute (or root-relative) content directory
    pub fn content_path(&self) -> PathBuf {
        self.root.join(&self.content_dir)
    }

    /// Absolute (or root-relative) manifest path
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output)
    }

    /// Content directory as it appears in each record's `path`
    pub fn display_prefix(&self) -> String {
        slash_path(self.relative_to_root(&self.content_dir))
    }

    /// Manifest path as it appears in the summary line
    pub fn display_output(&self) -> String {
        slash_path(self.relative_to_root(&self.output))
    }

    fn relative_to_root<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

/// Join the normal components of a path with `/`, whatever the platform
fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::RootDir => Some(String::new()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_blog_layout() {
        let config = IndexConfig::default();
        assert_eq!(config.content_path(), Path::new("./blogs"));
        assert_eq!(config.output_path(), Path::new("./blogs/index.json"));
        assert_eq!(config.display_prefix(), "blogs");
        assert_eq!(config.display_output(), "blogs/index.json");
        assert_eq!(config.extension, "md");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = IndexConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, IndexError::Config { .. }));
    }

    #[test]
    fn test_load_empty_object_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        std::fs::write(&path, "{}").unwrap();

        assert_eq!(IndexConfig::load(&path).unwrap(), IndexConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        std::fs::write(&path, r#"{ "content_dir": "posts", "extension": "markdown" }"#).unwrap();

        let config = IndexConfig::load(&path).unwrap();
        assert_eq!(config.content_dir, PathBuf::from("posts"));
        assert_eq!(config.extension, "markdown");
        assert_eq!(config.output, PathBuf::from("blogs/index.json"));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = IndexConfig::load(&path).unwrap_err();
        assert!(matches!(err, IndexError::ConfigParse { .. }));
    }

    #[test]
    fn test_display_paths_strip_root() {
        let config = IndexConfig {
            root: PathBuf::from("/srv/site"),
            content_dir: PathBuf::from("/srv/site/content/posts"),
            output: PathBuf::from("public/posts.json"),
            extension: "md".to_string(),
        };
        assert_eq!(config.display_prefix(), "content/posts");
        assert_eq!(config.display_output(), "public/posts.json");
        assert_eq!(config.content_path(), Path::new("/srv/site/content/posts"));

        let outside = IndexConfig {
            content_dir: PathBuf::from("/var/posts"),
            ..config
        };
        assert_eq!(outside.display_prefix(), "/var/posts");
    }
}
