//! Theme registry and selection
//!
//! Everything about "which theme is active" lives here:
//! - Static catalog of platforms, built-in themes, highlight styles, and
//!   preview modes
//! - The `ThemeSelection` sum type unifying built-in and custom themes
//! - Persistence for user-authored custom themes

pub mod catalog;
pub mod selection;
pub mod store;

pub use catalog::{BuiltinTheme, HighlightStyle, Platform, PreviewMode};
pub use selection::{CustomTheme, ThemeSelection, CUSTOM_ID_PREFIX};
pub use store::{CustomThemeRecord, CustomThemeStore};
