//! Custom theme persistence
//!
//! User-authored themes live outside the static catalog: each record carries
//! an opaque stable identity, an optional display name, and its CSS text.
//! The store persists records as a JSON file under the application data
//! directory and never reuses an identity, so `ThemeSelection` equality and
//! `stable_id` remain valid across restarts.

use crate::config::APP_ID;
use crate::error::{StoreError, StoreResult};
use crate::theme::selection::{CustomTheme, ThemeSelection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;
use walkdir::WalkDir;

/// Store format version for migration
const STORE_VERSION: u32 = 1;

/// A persisted custom theme record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomThemeRecord {
    /// Opaque stable identity, assigned once at creation
    pub id: String,

    /// Optional user-given name
    pub name: Option<String>,

    /// The stylesheet contents
    pub css: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the name or CSS was last changed
    pub modified_at: DateTime<Utc>,
}

impl CustomThemeRecord {
    fn new(name: Option<String>, css: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            css,
            created_at: now,
            modified_at: now,
        }
    }

    /// Selection value referring to this record
    pub fn selection(&self) -> ThemeSelection {
        ThemeSelection::Custom(CustomTheme {
            id: self.id.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
            modified_at: self.modified_at,
        })
    }
}

/// On-disk shape of the store file
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    themes: Vec<CustomThemeRecord>,
}

/// In-memory collection of custom themes with JSON persistence
///
/// Records are kept in creation order, which is also the display order.
#[derive(Debug, Default)]
pub struct CustomThemeStore {
    themes: Vec<CustomThemeRecord>,
}

impl CustomThemeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store from the default data directory, or start empty
    pub fn load() -> StoreResult<Self> {
        Self::load_from(&Self::store_file_path()?)
    }

    /// Load the store from an explicit file path
    ///
    /// A missing file is not an error; it yields an empty store.
    pub fn load_from(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path).map_err(|e| StoreError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: StoreFile =
            serde_json::from_str(&content).map_err(|e| StoreError::ParseError(e.to_string()))?;

        log::info!("Loaded {} custom themes", file.themes.len());
        Ok(Self {
            themes: file.themes,
        })
    }

    /// Save the store to the default data directory
    pub fn save(&self) -> StoreResult<()> {
        self.save_to(&Self::store_file_path()?)
    }

    /// Save the store to an explicit file path
    ///
    /// Writes to a temporary sibling first and renames over the target, so a
    /// crash mid-write never corrupts the existing file.
    pub fn save_to(&self, path: &Path) -> StoreResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let file = StoreFile {
            version: STORE_VERSION,
            themes: self.themes.clone(),
        };
        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| StoreError::ParseError(e.to_string()))?;

        let tmp_path = path.with_extension("json.tmp");
        let write = |p: &Path| -> std::io::Result<()> {
            let mut f = std::fs::File::create(p)?;
            f.write_all(content.as_bytes())?;
            f.sync_all()
        };
        write(&tmp_path).map_err(|e| StoreError::WriteError {
            path: tmp_path.clone(),
            source: e,
        })?;
        std::fs::rename(&tmp_path, path).map_err(|e| StoreError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        log::info!("Saved {} custom themes", self.themes.len());
        Ok(())
    }

    /// Default store file path under the application data directory
    fn store_file_path() -> StoreResult<PathBuf> {
        dirs::data_dir()
            .map(|p| p.join(APP_ID).join("custom_themes.json"))
            .ok_or(StoreError::DirectoryError)
    }

    /// Create a new custom theme and return its selection value
    pub fn create(&mut self, name: Option<String>, css: String) -> ThemeSelection {
        let record = CustomThemeRecord::new(name, css);
        let selection = record.selection();
        self.themes.push(record);
        selection
    }

    /// Import a `.css` file as a new custom theme
    ///
    /// The theme name is derived from the file stem.
    pub fn import_file(&mut self, path: &Path) -> StoreResult<ThemeSelection> {
        if path.extension().and_then(|e| e.to_str()) != Some("css") {
            return Err(StoreError::NotAStylesheet {
                path: path.to_path_buf(),
            });
        }

        let css = std::fs::read_to_string(path).map_err(|e| StoreError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(String::from);

        Ok(self.create(name, css))
    }

    /// Import every `.css` file under a directory, recursively
    ///
    /// Unreadable files are skipped with a warning rather than aborting the
    /// whole import. Returns the selections created, in scan order.
    pub fn import_dir(&mut self, root: &Path) -> Vec<ThemeSelection> {
        let mut imported = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("css") {
                continue;
            }
            match self.import_file(path) {
                Ok(selection) => imported.push(selection),
                Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
            }
        }

        log::info!("Imported {} themes from {}", imported.len(), root.display());
        imported
    }

    /// Look up a record by identity
    pub fn get(&self, id: &str) -> Option<&CustomThemeRecord> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// Selection value for a stored identity, if it exists
    pub fn selection_for(&self, id: &str) -> Option<ThemeSelection> {
        self.get(id).map(CustomThemeRecord::selection)
    }

    /// Rename a custom theme
    pub fn rename(&mut self, id: &str, name: Option<String>) -> StoreResult<()> {
        let record = self.get_mut(id)?;
        record.name = name;
        record.modified_at = Utc::now();
        Ok(())
    }

    /// Replace a custom theme's CSS
    pub fn update_css(&mut self, id: &str, css: String) -> StoreResult<()> {
        let record = self.get_mut(id)?;
        record.css = css;
        record.modified_at = Utc::now();
        Ok(())
    }

    /// Delete a custom theme
    pub fn remove(&mut self, id: &str) -> StoreResult<CustomThemeRecord> {
        let index = self
            .themes
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        Ok(self.themes.remove(index))
    }

    /// Iterate records in creation order
    pub fn iter(&self) -> impl Iterator<Item = &CustomThemeRecord> {
        self.themes.iter()
    }

    /// Number of stored themes
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the store holds no themes
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    fn get_mut(&mut self, id: &str) -> StoreResult<&mut CustomThemeRecord> {
        self.themes
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }
}
