//! Configuration management for Markpress
//!
//! Handles loading, saving, and managing application configuration,
//! including the per-platform "last selected theme" memory keyed by the
//! selection's stable id. Configuration is persisted as JSON under the
//! platform config directory.

use crate::error::{ConfigError, ConfigResult};
use crate::theme::store::CustomThemeStore;
use crate::theme::{HighlightStyle, Platform, PreviewMode, ThemeSelection, CUSTOM_ID_PREFIX};
use crate::theme::catalog::BuiltinTheme;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Application identifier following reverse-DNS convention
pub const APP_ID: &str = "com.markpress.Markpress";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Publishing configuration
    pub publish: PublishConfig,

    /// Rendering configuration
    pub render: RenderConfig,
}

/// Publishing configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Last active platform
    pub platform: Platform,

    /// Last selected theme per platform, keyed by `Platform::key()`,
    /// valued by the selection's stable id
    pub last_selected: HashMap<String, String>,
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Preview viewport mode
    pub preview_mode: PreviewMode,

    /// Code-highlight stylesheet
    pub highlight_style: HighlightStyle,

    /// Inline the CSS stack into rendered documents
    pub include_styles: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            preview_mode: PreviewMode::Mobile,
            highlight_style: HighlightStyle::Github,
            include_styles: true,
        }
    }
}

impl Config {
    /// Load configuration from the default config directory, or defaults
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit file path
    ///
    /// A missing file is not an error; it yields the defaults.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadError(e.to_string()))?;
        let config =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default config directory
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to an explicit file path
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        Ok(())
    }

    /// Get the configuration directory path
    pub fn config_dir() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_ID))
            .ok_or(ConfigError::DirectoryError)
    }

    /// Get the data directory path (custom themes, session data)
    pub fn data_dir() -> ConfigResult<PathBuf> {
        dirs::data_dir()
            .map(|p| p.join(APP_ID))
            .ok_or(ConfigError::DirectoryError)
    }

    fn config_file_path() -> ConfigResult<PathBuf> {
        Self::config_dir().map(|p| p.join("config.json"))
    }

    /// Remember a selection as the platform's last-used theme
    pub fn remember_selection(&mut self, platform: Platform, selection: &ThemeSelection) {
        self.publish
            .last_selected
            .insert(platform.key().to_string(), selection.stable_id());
    }

    /// Resolve the platform's remembered selection against live data
    ///
    /// Falls back to the platform default when nothing was remembered, when
    /// the remembered built-in no longer belongs to the platform, or when
    /// the remembered custom theme has since been deleted.
    pub fn selection_for(&self, platform: Platform, store: &CustomThemeStore) -> ThemeSelection {
        let Some(stable_id) = self.publish.last_selected.get(platform.key()) else {
            return ThemeSelection::Builtin(platform.default_theme());
        };

        if let Some(id) = stable_id.strip_prefix(CUSTOM_ID_PREFIX) {
            return store.selection_for(id).unwrap_or_else(|| {
                log::warn!("Remembered custom theme {} no longer exists", id);
                ThemeSelection::Builtin(platform.default_theme())
            });
        }

        match BuiltinTheme::from_stylesheet_path(stable_id) {
            Some(theme) if platform.builtin_themes().contains(&theme) => {
                ThemeSelection::Builtin(theme)
            }
            _ => {
                log::warn!(
                    "Remembered theme {} is not valid for {}",
                    stable_id,
                    platform.key()
                );
                ThemeSelection::Builtin(platform.default_theme())
            }
        }
    }
}
