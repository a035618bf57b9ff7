//! Color scheme preference
//!
//! Light/dark choice persisted in local storage. First run derives the
//! scheme from the OS `prefers-color-scheme` media query; once the user
//! toggles, the stored value wins on every reload.

use leptos::prelude::*;

/// Local storage key holding the persisted scheme. Kept stable across
/// releases so existing preferences survive upgrades.
pub const COLOR_SCHEME_STORAGE_KEY: &str = "mantine-color-scheme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown strings yield `None` so a corrupt
    /// entry falls back to the OS preference.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ColorScheme::Light),
            "dark" => Some(ColorScheme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// Pick the scheme to start with: a persisted choice always wins
    /// over the OS-derived default.
    pub fn resolve(stored: Option<Self>, os_default: Self) -> Self {
        stored.unwrap_or(os_default)
    }
}

/// Read the OS-level preference via the `prefers-color-scheme` media query.
fn os_preference() -> ColorScheme {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false);

    if prefers_dark {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    }
}

fn stored_preference() -> Option<ColorScheme> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    let value = storage.get_item(COLOR_SCHEME_STORAGE_KEY).ok().flatten()?;
    ColorScheme::parse(&value)
}

fn persist_preference(scheme: ColorScheme) {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if let Some(storage) = storage {
        if let Err(e) = storage.set_item(COLOR_SCHEME_STORAGE_KEY, scheme.as_str()) {
            log::warn!("failed to persist color scheme: {:?}", e);
        }
    }
}

/// Reactive handle to the current color scheme.
#[derive(Clone, Copy)]
pub struct ThemeController {
    scheme: RwSignal<ColorScheme>,
}

impl ThemeController {
    /// Initialize from the stored preference, falling back to the OS one.
    pub fn init() -> Self {
        let initial = ColorScheme::resolve(stored_preference(), os_preference());
        Self {
            scheme: RwSignal::new(initial),
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme.get()
    }

    /// Flip the scheme and persist the new value.
    pub fn toggle(&self) {
        let next = self.scheme.get_untracked().toggled();
        persist_preference(next);
        self.scheme.set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        assert_eq!(ColorScheme::parse("light"), Some(ColorScheme::Light));
        assert_eq!(ColorScheme::parse("dark"), Some(ColorScheme::Dark));
        assert_eq!(ColorScheme::parse(ColorScheme::Dark.as_str()), Some(ColorScheme::Dark));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(ColorScheme::parse("solarized"), None);
        assert_eq!(ColorScheme::parse(""), None);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggled(), ColorScheme::Light);
    }

    #[test]
    fn test_stored_preference_beats_os_default() {
        assert_eq!(
            ColorScheme::resolve(Some(ColorScheme::Dark), ColorScheme::Light),
            ColorScheme::Dark
        );
        assert_eq!(
            ColorScheme::resolve(Some(ColorScheme::Light), ColorScheme::Dark),
            ColorScheme::Light
        );
    }

    #[test]
    fn test_no_stored_preference_falls_back_to_os() {
        assert_eq!(
            ColorScheme::resolve(None, ColorScheme::Dark),
            ColorScheme::Dark
        );
    }
}
