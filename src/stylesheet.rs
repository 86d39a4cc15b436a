//! Stylesheet loading
//!
//! The catalog hands out opaque bundle-relative paths like
//! `"themes/lapis.css"`; turning a path into CSS text is an injected
//! capability so the catalog and renderer stay pure and testable without
//! filesystem access.

use crate::error::{StylesheetError, StylesheetResult};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Resolves catalog stylesheet paths to CSS text
pub trait StylesheetLoader {
    /// Load the stylesheet at a bundle-relative path
    fn load(&self, path: &str) -> StylesheetResult<String>;
}

/// Loader backed by a stylesheet bundle directory on disk
///
/// Paths are resolved relative to the bundle root; paths that try to escape
/// the root (absolute paths or `..` components) are rejected.
#[derive(Debug, Clone)]
pub struct DirLoader {
    root: PathBuf,
}

impl DirLoader {
    /// Create a loader rooted at the given bundle directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The bundle root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> StylesheetResult<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative.components().any(|c| {
            !matches!(c, Component::Normal(_) | Component::CurDir)
        });
        if escapes {
            return Err(StylesheetError::OutsideBundle {
                path: path.to_string(),
            });
        }
        Ok(self.root.join(relative))
    }
}

impl StylesheetLoader for DirLoader {
    fn load(&self, path: &str) -> StylesheetResult<String> {
        let full = self.resolve(path)?;

        if !full.is_file() {
            return Err(StylesheetError::NotFound {
                path: path.to_string(),
            });
        }

        std::fs::read_to_string(&full).map_err(|e| StylesheetError::ReadError {
            path: path.to_string(),
            source: e,
        })
    }
}

/// In-memory loader for tests and embedded bundles
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    sheets: HashMap<String, String>,
}

impl MemoryLoader {
    /// Create an empty loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stylesheet under a path
    pub fn insert(&mut self, path: impl Into<String>, css: impl Into<String>) {
        self.sheets.insert(path.into(), css.into());
    }

    /// Builder-style variant of `insert`
    pub fn with(mut self, path: impl Into<String>, css: impl Into<String>) -> Self {
        self.insert(path, css);
        self
    }
}

impl StylesheetLoader for MemoryLoader {
    fn load(&self, path: &str) -> StylesheetResult<String> {
        self.sheets
            .get(path)
            .cloned()
            .ok_or_else(|| StylesheetError::NotFound {
                path: path.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_loader() {
        let loader = MemoryLoader::new().with("themes/a.css", "p { }");
        assert_eq!(loader.load("themes/a.css").unwrap(), "p { }");
        assert!(matches!(
            loader.load("themes/b.css"),
            Err(StylesheetError::NotFound { .. })
        ));
    }

    #[test]
    fn test_dir_loader_reads_bundle() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("themes")).unwrap();
        std::fs::write(dir.path().join("themes/a.css"), "h1 { color: red; }").unwrap();

        let loader = DirLoader::new(dir.path());
        assert_eq!(loader.load("themes/a.css").unwrap(), "h1 { color: red; }");
    }

    #[test]
    fn test_dir_loader_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = DirLoader::new(dir.path());
        assert!(matches!(
            loader.load("themes/missing.css"),
            Err(StylesheetError::NotFound { .. })
        ));
    }

    #[test]
    fn test_dir_loader_rejects_escape() {
        let dir = tempfile::tempdir().unwrap();
        let loader = DirLoader::new(dir.path());
        assert!(matches!(
            loader.load("../secrets.css"),
            Err(StylesheetError::OutsideBundle { .. })
        ));
        assert!(matches!(
            loader.load("/etc/passwd"),
            Err(StylesheetError::OutsideBundle { .. })
        ));
    }
}
