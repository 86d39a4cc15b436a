//! Error types for Markpress
//!
//! This module defines all custom error types used throughout the crate.
//! Error types are organized by category for clear error handling and
//! user-friendly messages.
//!
//! Catalog and selection lookups have no error taxonomy at all: they are
//! total functions over closed static sets, and the one illegal selection
//! state (discriminator/payload mismatch) is unrepresentable by type.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type encompassing all error categories
#[derive(Error, Debug)]
pub enum Error {
    /// Custom theme store errors
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Stylesheet loading errors
    #[error(transparent)]
    Stylesheet(#[from] StylesheetError),

    /// Rendering errors
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Custom theme store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record with the given identity
    #[error("Custom theme not found: {id}")]
    NotFound { id: String },

    /// Imported file is not a stylesheet
    #[error("Not a stylesheet file: {}", path.display())]
    NotAStylesheet { path: PathBuf },

    /// Error reading an imported stylesheet
    #[error("Could not read stylesheet: {}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the store file
    #[error("Could not save custom themes: {}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing a persisted store file
    #[error("Invalid custom theme data: {0}")]
    ParseError(String),

    /// Could not determine the data directory
    #[error("Could not access the application data directory")]
    DirectoryError,
}

/// Stylesheet loading errors
#[derive(Error, Debug)]
pub enum StylesheetError {
    /// Stylesheet path is unknown to the loader
    #[error("Stylesheet not found: {path}")]
    NotFound { path: String },

    /// Path tries to escape the bundle root
    #[error("Stylesheet path is outside the bundle: {path}")]
    OutsideBundle { path: String },

    /// Error reading the stylesheet
    #[error("Could not read stylesheet: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// A stylesheet in the composition stack could not be loaded
    #[error(transparent)]
    Stylesheet(#[from] StylesheetError),

    /// The selected custom theme no longer exists in the store
    #[error("Custom theme not found: {id}")]
    MissingCustomTheme { id: String },

    /// Error writing the exported document
    #[error("Could not write rendered document: {}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error loading the configuration file
    #[error("Could not load configuration: {0}")]
    LoadError(String),

    /// Error parsing the configuration
    #[error("Invalid configuration format: {0}")]
    ParseError(String),

    /// Error saving the configuration
    #[error("Could not save configuration: {0}")]
    SaveError(String),

    /// Could not determine the configuration directory
    #[error("Could not access the configuration directory")]
    DirectoryError,
}

/// Result type alias for operations that can fail with any crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type alias for stylesheet loading
pub type StylesheetResult<T> = std::result::Result<T, StylesheetError>;

/// Result type alias for rendering
pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl StoreError {
    /// Create a user-friendly error message suitable for display in dialogs
    pub fn user_message(&self) -> String {
        match self {
            StoreError::NotFound { .. } => {
                "The custom theme could not be found. It may have been deleted.".to_string()
            }
            StoreError::NotAStylesheet { .. } => {
                "Only .css files can be imported as custom themes.".to_string()
            }
            StoreError::WriteError { .. } => {
                "Could not save your custom themes. Check disk space and permissions.".to_string()
            }
            _ => self.to_string(),
        }
    }
}
