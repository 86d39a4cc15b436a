//! Themed HTML rendering
//!
//! Turns Markdown into a publishable HTML document with the selected CSS
//! stack inlined: the preview-mode base stylesheet first, then the active
//! theme (built-in via the loader, custom via the store), then the optional
//! code-highlight stylesheet. Parsing itself is delegated to pulldown-cmark
//! with the extensions the platforms expect.

use crate::error::{RenderError, RenderResult};
use crate::stylesheet::StylesheetLoader;
use crate::theme::store::CustomThemeStore;
use crate::theme::{HighlightStyle, PreviewMode, ThemeSelection};
use pulldown_cmark::{html, Options, Parser};
use std::io::Write;
use std::path::Path;

/// Options for rendering a document
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Document title, HTML-escaped into `<title>`
    pub title: Option<String>,

    /// Viewport mode selecting the base layout stylesheet
    pub preview_mode: PreviewMode,

    /// Code-highlight stylesheet to inline, if any
    pub highlight: Option<HighlightStyle>,

    /// Inline the CSS stack; disable to produce an unstyled document
    pub include_styles: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: None,
            preview_mode: PreviewMode::Mobile,
            highlight: Some(HighlightStyle::Github),
            include_styles: true,
        }
    }
}

/// Markdown to themed-HTML renderer
pub struct HtmlRenderer {
    options: Options,
}

impl HtmlRenderer {
    /// Create a renderer with the extension set the platforms expect
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_SMART_PUNCTUATION);

        Self { options }
    }

    /// Render the Markdown body only, without the document wrapper
    pub fn render_fragment(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut body = String::new();
        html::push_html(&mut body, parser);
        body
    }

    /// Render a complete HTML document with the selection's CSS stack
    pub fn render<L>(
        &self,
        markdown: &str,
        selection: &ThemeSelection,
        store: &CustomThemeStore,
        loader: &L,
        options: &RenderOptions,
    ) -> RenderResult<String>
    where
        L: StylesheetLoader + ?Sized,
    {
        let body = self.render_fragment(markdown);
        let title = options.title.as_deref().unwrap_or("Document");

        let styles = if options.include_styles {
            let css = compose_styles(selection, store, loader, options)?;
            format!("<style>\n{}\n    </style>", css)
        } else {
            String::new()
        };

        log::debug!(
            "Rendered document with theme {}",
            selection.stable_id()
        );

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="zh">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="generator" content="Markpress">
    <title>{}</title>
    {}
</head>
<body>
    <article class="markdown-body" data-theme="{}">
        {}
    </article>
</body>
</html>"#,
            escape_html(title),
            styles,
            escape_html(&selection.stable_id()),
            body
        ))
    }

    /// Render and write the document to a file
    pub fn render_to_file<L>(
        &self,
        markdown: &str,
        selection: &ThemeSelection,
        store: &CustomThemeStore,
        loader: &L,
        options: &RenderOptions,
        output_path: &Path,
    ) -> RenderResult<()>
    where
        L: StylesheetLoader + ?Sized,
    {
        let document = self.render(markdown, selection, store, loader, options)?;

        let write = |p: &Path| -> std::io::Result<()> {
            let mut file = std::fs::File::create(p)?;
            file.write_all(document.as_bytes())
        };
        write(output_path).map_err(|e| RenderError::WriteError {
            path: output_path.to_path_buf(),
            source: e,
        })
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the inlined CSS stack for a selection
///
/// Order matters: base layout first, theme second, highlight last, so later
/// sheets can override earlier ones.
pub fn compose_styles<L>(
    selection: &ThemeSelection,
    store: &CustomThemeStore,
    loader: &L,
    options: &RenderOptions,
) -> RenderResult<String>
where
    L: StylesheetLoader + ?Sized,
{
    let mut css = loader.load(options.preview_mode.stylesheet_path())?;

    let theme_css = match selection {
        ThemeSelection::Builtin(theme) => loader.load(theme.stylesheet_path())?,
        ThemeSelection::Custom(custom) => store
            .get(&custom.id)
            .map(|record| record.css.clone())
            .ok_or_else(|| RenderError::MissingCustomTheme {
                id: custom.id.clone(),
            })?,
    };
    css.push('\n');
    css.push_str(&theme_css);

    if let Some(highlight) = options.highlight {
        css.push('\n');
        css.push_str(&loader.load(highlight.stylesheet_path())?);
    }

    Ok(css)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stylesheet::MemoryLoader;
    use crate::theme::BuiltinTheme;

    fn test_loader() -> MemoryLoader {
        MemoryLoader::new()
            .with("base/base_mobile.css", "/* base mobile */")
            .with("base/base_desktop.css", "/* base desktop */")
            .with("themes/gzh_default.css", "/* gzh default */")
            .with("themes/lapis.css", "/* lapis */")
            .with("highlight/github.css", "/* github */")
    }

    #[test]
    fn test_render_fragment() {
        let renderer = HtmlRenderer::new();
        let body = renderer.render_fragment("# Hello\n\nWorld");
        assert!(body.contains("<h1>Hello</h1>"));
        assert!(body.contains("<p>World</p>"));
    }

    #[test]
    fn test_render_builtin_theme_document() {
        let renderer = HtmlRenderer::new();
        let store = CustomThemeStore::new();
        let options = RenderOptions {
            title: Some("Post".to_string()),
            ..Default::default()
        };

        let html = renderer
            .render(
                "# Title",
                &ThemeSelection::Builtin(BuiltinTheme::Lapis),
                &store,
                &test_loader(),
                &options,
            )
            .unwrap();

        assert!(html.contains("<title>Post</title>"));
        assert!(html.contains("/* base mobile */"));
        assert!(html.contains("/* lapis */"));
        assert!(html.contains("/* github */"));
        assert!(html.contains(r#"data-theme="themes/lapis.css""#));
    }

    #[test]
    fn test_render_custom_theme_uses_store_css() {
        let renderer = HtmlRenderer::new();
        let mut store = CustomThemeStore::new();
        let selection = store.create(Some("mine".to_string()), "/* my css */".to_string());

        let html = renderer
            .render(
                "hello",
                &selection,
                &store,
                &test_loader(),
                &RenderOptions::default(),
            )
            .unwrap();

        assert!(html.contains("/* my css */"));
        assert!(html.contains(&selection.stable_id()));
    }

    #[test]
    fn test_render_missing_custom_theme_fails() {
        let renderer = HtmlRenderer::new();
        let mut scratch = CustomThemeStore::new();
        let selection = scratch.create(None, String::new());

        // Rendering against a store that never saw the record
        let empty = CustomThemeStore::new();
        let err = renderer
            .render(
                "hello",
                &selection,
                &empty,
                &test_loader(),
                &RenderOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingCustomTheme { .. }));
    }

    #[test]
    fn test_render_missing_stylesheet_fails() {
        let renderer = HtmlRenderer::new();
        let store = CustomThemeStore::new();
        let loader = MemoryLoader::new(); // nothing registered

        let err = renderer
            .render(
                "hello",
                &ThemeSelection::Builtin(BuiltinTheme::GzhDefault),
                &store,
                &loader,
                &RenderOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, RenderError::Stylesheet(_)));
    }

    #[test]
    fn test_style_order_base_theme_highlight() {
        let store = CustomThemeStore::new();
        let css = compose_styles(
            &ThemeSelection::Builtin(BuiltinTheme::GzhDefault),
            &store,
            &test_loader(),
            &RenderOptions::default(),
        )
        .unwrap();

        let base = css.find("/* base mobile */").unwrap();
        let theme = css.find("/* gzh default */").unwrap();
        let highlight = css.find("/* github */").unwrap();
        assert!(base < theme && theme < highlight);
    }

    #[test]
    fn test_no_styles_when_disabled() {
        let renderer = HtmlRenderer::new();
        let store = CustomThemeStore::new();
        let options = RenderOptions {
            include_styles: false,
            ..Default::default()
        };

        let html = renderer
            .render(
                "hello",
                &ThemeSelection::Builtin(BuiltinTheme::GzhDefault),
                &store,
                &MemoryLoader::new(),
                &options,
            )
            .unwrap();
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_title_is_escaped() {
        let renderer = HtmlRenderer::new();
        let store = CustomThemeStore::new();
        let options = RenderOptions {
            title: Some("<b>&".to_string()),
            include_styles: false,
            ..Default::default()
        };

        let html = renderer
            .render(
                "hello",
                &ThemeSelection::Builtin(BuiltinTheme::GzhDefault),
                &store,
                &MemoryLoader::new(),
                &options,
            )
            .unwrap();
        assert!(html.contains("<title>&lt;b&gt;&amp;</title>"));
    }

    #[test]
    fn test_render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");

        let renderer = HtmlRenderer::new();
        let store = CustomThemeStore::new();
        renderer
            .render_to_file(
                "# Hi",
                &ThemeSelection::Builtin(BuiltinTheme::GzhDefault),
                &store,
                &test_loader(),
                &RenderOptions::default(),
                &path,
            )
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<h1>Hi</h1>"));
    }

    #[test]
    fn test_tables_extension_enabled() {
        let renderer = HtmlRenderer::new();
        let body = renderer.render_fragment("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(body.contains("<table>"));
    }
}
