//! Static theme catalog
//!
//! The catalog is process-wide immutable data: the closed set of publishing
//! platforms, the built-in themes each platform accepts (in display order),
//! the code-highlight stylesheets, and the preview viewport modes. All
//! lookups are total functions with no failure modes.

use serde::{Deserialize, Serialize};

/// A publishing destination
///
/// Each platform accepts a fixed, ordered subset of the built-in themes.
/// The first theme in the list is the platform default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// WeChat official accounts (公众号)
    #[default]
    Gzh,
    /// Toutiao (今日头条)
    Toutiao,
    /// Zhihu (知乎)
    Zhihu,
    /// Juejin (稀土掘金)
    Juejin,
    /// Medium
    Medium,
}

impl Platform {
    /// All platforms, in menu order
    pub const ALL: [Platform; 5] = [
        Platform::Gzh,
        Platform::Toutiao,
        Platform::Zhihu,
        Platform::Juejin,
        Platform::Medium,
    ];

    /// Human-readable platform name
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Gzh => "公众号",
            Platform::Toutiao => "今日头条",
            Platform::Zhihu => "知乎",
            Platform::Juejin => "稀土掘金",
            Platform::Medium => "Medium",
        }
    }

    /// Stable key used in configuration files
    pub fn key(&self) -> &'static str {
        match self {
            Platform::Gzh => "gzh",
            Platform::Toutiao => "toutiao",
            Platform::Zhihu => "zhihu",
            Platform::Juejin => "juejin",
            Platform::Medium => "medium",
        }
    }

    /// Built-in themes compatible with this platform, in display order
    ///
    /// Never empty. The order determines menu order; the first entry is the
    /// platform default.
    pub fn builtin_themes(&self) -> &'static [BuiltinTheme] {
        match self {
            Platform::Gzh => &[
                BuiltinTheme::GzhDefault,
                BuiltinTheme::OrangeHeart,
                BuiltinTheme::Rainbow,
                BuiltinTheme::Lapis,
                BuiltinTheme::Pie,
                BuiltinTheme::Maize,
                BuiltinTheme::Purple,
            ],
            Platform::Toutiao => &[BuiltinTheme::ToutiaoDefault],
            Platform::Zhihu => &[BuiltinTheme::ZhihuDefault],
            Platform::Juejin => &[BuiltinTheme::JuejinDefault],
            Platform::Medium => &[BuiltinTheme::MediumDefault],
        }
    }

    /// The platform's default built-in theme
    pub fn default_theme(&self) -> BuiltinTheme {
        self.builtin_themes()[0]
    }
}

/// A bundled theme stylesheet
///
/// Tags are static data: the stylesheet path is unique per tag and doubles
/// as the theme's stable identity (see `ThemeSelection::stable_id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinTheme {
    GzhDefault,
    OrangeHeart,
    Rainbow,
    Lapis,
    Pie,
    Maize,
    Purple,
    ToutiaoDefault,
    ZhihuDefault,
    JuejinDefault,
    MediumDefault,
}

impl BuiltinTheme {
    /// All built-in themes across every platform
    pub const ALL: [BuiltinTheme; 11] = [
        BuiltinTheme::GzhDefault,
        BuiltinTheme::OrangeHeart,
        BuiltinTheme::Rainbow,
        BuiltinTheme::Lapis,
        BuiltinTheme::Pie,
        BuiltinTheme::Maize,
        BuiltinTheme::Purple,
        BuiltinTheme::ToutiaoDefault,
        BuiltinTheme::ZhihuDefault,
        BuiltinTheme::JuejinDefault,
        BuiltinTheme::MediumDefault,
    ];

    /// Bundle-relative stylesheet path, unique per tag
    pub fn stylesheet_path(&self) -> &'static str {
        match self {
            BuiltinTheme::GzhDefault => "themes/gzh_default.css",
            BuiltinTheme::OrangeHeart => "themes/orangeheart.css",
            BuiltinTheme::Rainbow => "themes/rainbow.css",
            BuiltinTheme::Lapis => "themes/lapis.css",
            BuiltinTheme::Pie => "themes/pie.css",
            BuiltinTheme::Maize => "themes/maize.css",
            BuiltinTheme::Purple => "themes/purple.css",
            BuiltinTheme::ToutiaoDefault => "themes/toutiao_default.css",
            BuiltinTheme::ZhihuDefault => "themes/zhihu_default.css",
            BuiltinTheme::JuejinDefault => "themes/juejin_default.css",
            BuiltinTheme::MediumDefault => "themes/medium_default.css",
        }
    }

    /// Theme name as shown in menus
    pub fn display_name(&self) -> &'static str {
        match self {
            BuiltinTheme::GzhDefault
            | BuiltinTheme::ToutiaoDefault
            | BuiltinTheme::ZhihuDefault
            | BuiltinTheme::JuejinDefault
            | BuiltinTheme::MediumDefault => "默认",
            BuiltinTheme::OrangeHeart => "Orange Heart",
            BuiltinTheme::Rainbow => "Rainbow",
            BuiltinTheme::Lapis => "Lapis",
            BuiltinTheme::Pie => "Pie",
            BuiltinTheme::Maize => "Maize",
            BuiltinTheme::Purple => "Purple",
        }
    }

    /// Attributed designer, empty for platform defaults
    pub fn author(&self) -> &'static str {
        match self {
            BuiltinTheme::OrangeHeart => "evgo2017",
            BuiltinTheme::Rainbow => "thezbm",
            BuiltinTheme::Lapis => "YiNN",
            BuiltinTheme::Pie => "kevinzhao2233",
            BuiltinTheme::Maize => "BEATREE",
            BuiltinTheme::Purple => "nihaojob",
            _ => "",
        }
    }

    /// Look up a built-in theme by its stylesheet path
    ///
    /// This is the inverse of `stylesheet_path`, used when restoring a
    /// persisted selection from its stable id.
    pub fn from_stylesheet_path(path: &str) -> Option<BuiltinTheme> {
        BuiltinTheme::ALL
            .iter()
            .copied()
            .find(|t| t.stylesheet_path() == path)
    }
}

/// Code-block syntax highlight stylesheet
///
/// Independent axis from the theme selection: any highlight style composes
/// with any theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HighlightStyle {
    #[default]
    Github,
    GithubDark,
    AtomOneLight,
    AtomOneDark,
    Dracula,
    Monokai,
    SolarizedLight,
    Xcode,
}

impl HighlightStyle {
    /// All highlight styles, in menu order
    pub const ALL: [HighlightStyle; 8] = [
        HighlightStyle::Github,
        HighlightStyle::GithubDark,
        HighlightStyle::AtomOneLight,
        HighlightStyle::AtomOneDark,
        HighlightStyle::Dracula,
        HighlightStyle::Monokai,
        HighlightStyle::SolarizedLight,
        HighlightStyle::Xcode,
    ];

    /// Bundle-relative stylesheet path
    pub fn stylesheet_path(&self) -> &'static str {
        match self {
            HighlightStyle::Github => "highlight/github.css",
            HighlightStyle::GithubDark => "highlight/github-dark.css",
            HighlightStyle::AtomOneLight => "highlight/atom-one-light.css",
            HighlightStyle::AtomOneDark => "highlight/atom-one-dark.css",
            HighlightStyle::Dracula => "highlight/dracula.css",
            HighlightStyle::Monokai => "highlight/monokai.css",
            HighlightStyle::SolarizedLight => "highlight/solarized-light.css",
            HighlightStyle::Xcode => "highlight/xcode.css",
        }
    }

    /// Style name as shown in menus
    pub fn display_name(&self) -> &'static str {
        match self {
            HighlightStyle::Github => "GitHub",
            HighlightStyle::GithubDark => "GitHub Dark",
            HighlightStyle::AtomOneLight => "Atom One Light",
            HighlightStyle::AtomOneDark => "Atom One Dark",
            HighlightStyle::Dracula => "Dracula",
            HighlightStyle::Monokai => "Monokai",
            HighlightStyle::SolarizedLight => "Solarized Light",
            HighlightStyle::Xcode => "Xcode",
        }
    }
}

/// Preview viewport mode
///
/// Selects which base layout stylesheet the rendered document starts from.
/// Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PreviewMode {
    /// Phone-width layout, the default for WeChat-style publishing
    #[default]
    Mobile,
    /// Full-width desktop layout
    Desktop,
}

impl PreviewMode {
    /// Base layout stylesheet for this mode
    pub fn stylesheet_path(&self) -> &'static str {
        match self {
            PreviewMode::Mobile => "base/base_mobile.css",
            PreviewMode::Desktop => "base/base_desktop.css",
        }
    }

    /// Switch to the other mode
    pub fn toggle(&self) -> PreviewMode {
        match self {
            PreviewMode::Mobile => PreviewMode::Desktop,
            PreviewMode::Desktop => PreviewMode::Mobile,
        }
    }
}
