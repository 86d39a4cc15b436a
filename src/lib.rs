//! Markpress - theme engine and themed HTML publishing pipeline for
//! Markdown content platforms
//!
//! The crate is the engine a desktop frontend sits on:
//! - A static catalog of publishing platforms and their built-in themes
//! - A `ThemeSelection` sum type unifying built-in and user-authored themes
//!   with stable identities
//! - JSON-persisted storage for custom themes
//! - Stylesheet loading as an injected capability
//! - Markdown to themed-HTML rendering for preview and export
//! - Configuration that remembers the last-used theme per platform
//!
//! The catalog and selection layers are pure functions over immutable data
//! and can be shared freely across threads.

pub mod config;
pub mod error;
pub mod render;
pub mod stylesheet;
pub mod theme;

pub use config::Config;
pub use error::{Error, Result};
pub use render::{HtmlRenderer, RenderOptions};
pub use stylesheet::{DirLoader, MemoryLoader, StylesheetLoader};
pub use theme::{
    BuiltinTheme, CustomTheme, CustomThemeRecord, CustomThemeStore, HighlightStyle, Platform,
    PreviewMode, ThemeSelection,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stylesheet::MemoryLoader;

    // End-to-end: pick a platform, pick a theme, render, remember, restore.
    #[test]
    fn test_select_render_and_restore() {
        let _ = env_logger::builder().is_test(true).try_init();

        let platform = Platform::Gzh;
        let theme = platform.builtin_themes()[3];
        assert_eq!(theme, BuiltinTheme::Lapis);
        let selection = ThemeSelection::from(theme);

        let store = CustomThemeStore::new();
        let loader = MemoryLoader::new()
            .with("base/base_mobile.css", "/* base */")
            .with("themes/lapis.css", "/* lapis */")
            .with("highlight/github.css", "/* hl */");

        let html = HtmlRenderer::new()
            .render(
                "# 标题\n\n正文",
                &selection,
                &store,
                &loader,
                &RenderOptions::default(),
            )
            .unwrap();
        assert!(html.contains("<h1>标题</h1>"));
        assert!(html.contains("/* lapis */"));

        let mut config = Config::default();
        config.remember_selection(platform, &selection);
        assert_eq!(config.selection_for(platform, &store), selection);
    }
}
