//! Theme registry and the cascading aspect lookup.
//!
//! Lookup never fails. An unknown or absent theme name falls back to the
//! default theme; an aspect the chosen theme does not define resolves to an
//! empty string.

use std::collections::BTreeMap;

use crate::aspect::Aspect;
use crate::builtin::{self, DEFAULT_ALIAS, DEFAULT_THEME};
use crate::palette::BrandPalette;
use crate::theme::Theme;

/// Immutable-by-convention catalog of themes for one brand palette.
///
/// Always holds a theme under [`DEFAULT_THEME`]: the builtins are installed
/// at construction and there is no removal API.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, Theme>,
}

impl ThemeRegistry {
    /// Registry holding every builtin theme, rendered against `palette`.
    #[must_use]
    pub fn builtin(palette: &BrandPalette) -> Self {
        let themes = builtin::builtin_names()
            .iter()
            .filter_map(|name| builtin::builtin_theme(name, palette))
            .map(|theme| (theme.name().to_string(), theme))
            .collect();
        Self { themes }
    }

    /// Add (or replace) a theme, keyed by its name.
    ///
    /// Other themes are untouched. Replacing the default theme is allowed;
    /// registering under the `default` alias is not, since that name always
    /// means [`DEFAULT_THEME`].
    pub fn insert(&mut self, theme: Theme) {
        if theme.name() == DEFAULT_ALIAS {
            tracing::warn!(
                "ignoring theme registered as `{DEFAULT_ALIAS}`; register it as `{DEFAULT_THEME}`"
            );
            return;
        }
        self.themes.insert(theme.name().to_string(), theme);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.insert(theme);
        self
    }

    /// The theme registered under `name`, honoring the `default` alias.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Theme> {
        let name = if name == DEFAULT_ALIAS { DEFAULT_THEME } else { name };
        self.themes.get(name)
    }

    /// Whether `name` refers to a registered theme.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered theme names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Resolve `aspect` for the theme called `name`.
    ///
    /// 1. exact theme, exact aspect
    /// 2. absent or unknown theme: the default theme, same aspect
    /// 3. aspect missing from the chosen theme: `""`
    #[must_use]
    pub fn resolve(&self, name: Option<&str>, aspect: Aspect) -> &str {
        let theme = name
            .and_then(|name| self.get(name))
            .or_else(|| self.themes.get(DEFAULT_THEME));
        theme.and_then(|theme| theme.get(aspect)).unwrap_or("")
    }

    /// [`resolve`](Self::resolve) by camelCase aspect key.
    ///
    /// Keys that name no aspect resolve to `""` like any other missing
    /// aspect.
    #[must_use]
    pub fn resolve_key(&self, name: Option<&str>, key: &str) -> &str {
        Aspect::from_key(key).map_or("", |aspect| self.resolve(name, aspect))
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin(&BrandPalette::default())
    }
}
