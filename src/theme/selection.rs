//! Theme identity resolution
//!
//! Unifies built-in and custom themes behind one selection value with
//! consistent equality, naming, and stable-id derivation. A selection is a
//! true sum type, so "discriminator says builtin but payload is custom" is
//! not representable.

use crate::theme::catalog::BuiltinTheme;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Prefix namespacing custom-theme stable ids
///
/// Built-in ids are bundle paths under `themes/`, so the two id spaces can
/// never collide.
pub const CUSTOM_ID_PREFIX: &str = "custom/";

/// A user-authored theme record
///
/// The identity is opaque and stable for the record's lifetime; the store
/// that creates records guarantees uniqueness. The CSS content itself lives
/// in the store, not in selection values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomTheme {
    /// Opaque stable identity
    pub id: String,

    /// Optional user-given name
    pub name: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub modified_at: DateTime<Utc>,
}

impl CustomTheme {
    /// Create a record with the given identity and name
    pub fn new(id: impl Into<String>, name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name,
            created_at: now,
            modified_at: now,
        }
    }
}

/// The currently active theme, regardless of kind
///
/// Constructed per user choice and immutable afterwards; replace the value
/// rather than mutating it when the selection changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ThemeSelection {
    /// A bundled theme referenced by its static tag
    Builtin(BuiltinTheme),
    /// A user-authored theme referenced by its persisted record
    Custom(CustomTheme),
}

impl ThemeSelection {
    /// Name shown in menus and window chrome
    ///
    /// Custom themes without a name display as empty.
    pub fn display_name(&self) -> &str {
        match self {
            ThemeSelection::Builtin(theme) => theme.display_name(),
            ThemeSelection::Custom(custom) => custom.name.as_deref().unwrap_or(""),
        }
    }

    /// Attributed designer
    ///
    /// Custom themes carry no attribution and always return empty.
    pub fn author(&self) -> &str {
        match self {
            ThemeSelection::Builtin(theme) => theme.author(),
            ThemeSelection::Custom(_) => "",
        }
    }

    /// Globally unique identity string
    ///
    /// Built-in selections use their stylesheet path verbatim; custom
    /// selections are namespaced under `custom/`. Used as the cache and
    /// persistence key for "last selected theme".
    pub fn stable_id(&self) -> String {
        match self {
            ThemeSelection::Builtin(theme) => theme.stylesheet_path().to_string(),
            ThemeSelection::Custom(custom) => format!("{}{}", CUSTOM_ID_PREFIX, custom.id),
        }
    }

    /// Whether this selection refers to a bundled theme
    pub fn is_builtin(&self) -> bool {
        matches!(self, ThemeSelection::Builtin(_))
    }
}

impl From<BuiltinTheme> for ThemeSelection {
    fn from(theme: BuiltinTheme) -> Self {
        ThemeSelection::Builtin(theme)
    }
}

// Equality is by kind and identity only. Two custom selections with the same
// id but different names are the same theme; a builtin and a custom selection
// are never equal.
impl PartialEq for ThemeSelection {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ThemeSelection::Builtin(a), ThemeSelection::Builtin(b)) => a == b,
            (ThemeSelection::Custom(a), ThemeSelection::Custom(b)) => a.id == b.id,
            _ => false,
        }
    }
}

impl Eq for ThemeSelection {}

impl Hash for ThemeSelection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            ThemeSelection::Builtin(theme) => {
                0u8.hash(state);
                theme.hash(state);
            }
            ThemeSelection::Custom(custom) => {
                1u8.hash(state);
                custom.id.hash(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn custom(id: &str, name: Option<&str>) -> ThemeSelection {
        ThemeSelection::Custom(CustomTheme::new(id, name.map(String::from)))
    }

    #[test]
    fn test_builtin_equality() {
        for a in BuiltinTheme::ALL {
            for b in BuiltinTheme::ALL {
                assert_eq!(
                    ThemeSelection::Builtin(a) == ThemeSelection::Builtin(b),
                    a == b
                );
            }
        }
    }

    #[test]
    fn test_custom_equality_ignores_name() {
        assert_eq!(custom("abc-123", Some("mine")), custom("abc-123", None));
        assert_ne!(custom("abc-123", Some("x")), custom("def-456", Some("x")));
    }

    #[test]
    fn test_cross_kind_never_equal() {
        for theme in BuiltinTheme::ALL {
            let sel = ThemeSelection::Builtin(theme);
            assert_ne!(sel, custom(theme.stylesheet_path(), None));
            assert_ne!(sel, custom("abc-123", Some(theme.display_name())));
        }
    }

    #[test]
    fn test_display_name_and_author() {
        let sel = ThemeSelection::Builtin(BuiltinTheme::ZhihuDefault);
        assert_eq!(sel.display_name(), "默认");
        assert_eq!(sel.author(), "");

        let named = custom("abc-123", Some("My Theme"));
        assert_eq!(named.display_name(), "My Theme");
        assert_eq!(named.author(), "");

        let unnamed = custom("abc-123", None);
        assert_eq!(unnamed.display_name(), "");
    }

    #[test]
    fn test_stable_id_scenarios() {
        assert_eq!(
            ThemeSelection::Builtin(BuiltinTheme::ZhihuDefault).stable_id(),
            "themes/zhihu_default.css"
        );
        assert_eq!(custom("abc-123", None).stable_id(), "custom/abc-123");
    }

    #[test]
    fn test_stable_id_injective() {
        let mut ids = HashSet::new();
        for theme in BuiltinTheme::ALL {
            assert!(ids.insert(ThemeSelection::Builtin(theme).stable_id()));
        }
        for id in ["abc-123", "def-456", "themes/gzh_default.css"] {
            assert!(ids.insert(custom(id, None).stable_id()));
        }
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(custom("abc-123", Some("a")));
        assert!(set.contains(&custom("abc-123", Some("b"))));
        assert!(!set.contains(&ThemeSelection::Builtin(BuiltinTheme::GzhDefault)));
    }
}
