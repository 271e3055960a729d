//! Light/dark theme preference: state machine, host-bound controller, and reactive capability.
//!
//! The current theme is decided once at startup from three sources in priority order: a valid
//! persisted token, the OS dark-mode preference, and a caller-supplied fallback. Afterwards it
//! changes only through explicit user actions ([`ThemeController::set_theme`],
//! [`ThemeController::toggle_theme`]) or OS notifications, and OS notifications are ignored once
//! the user has made an explicit choice.

use std::fmt;

use platform_host::THEME_PREFS_KEY;
use serde::{Deserialize, Serialize};

mod context;
mod controller;

pub use context::{create_theme_context, ThemeContext, ThemeSwitcher};
pub use controller::ThemeController;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Visual mode of the kit.
pub enum Theme {
    /// Light mode.
    Light,
    /// Dark mode.
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl Theme {
    /// Returns the persisted/DOM token for this theme.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a persisted token. Only the exact tokens `"light"` and `"dark"` are valid.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Returns the other theme.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Maps an OS dark-mode flag to a theme.
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Returns whether this is [`Theme::Dark`].
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Theme storage and DOM configuration.
pub struct ThemeConfig {
    /// Preference key holding the persisted theme token.
    pub storage_key: &'static str,
    /// Theme used when nothing is persisted and the OS does not prefer dark mode.
    pub default_theme: Theme,
    /// Attribute set on the document root element.
    pub root_attribute: &'static str,
    /// Body class present while the light theme is active.
    pub light_class: &'static str,
    /// Body class present while the dark theme is active.
    pub dark_class: &'static str,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_PREFS_KEY,
            default_theme: Theme::Light,
            root_attribute: "data-theme",
            light_class: "light",
            dark_class: "dark",
        }
    }
}

impl ThemeConfig {
    /// Returns the config with a different fallback theme.
    pub const fn with_default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self
    }

    /// Returns the body class for `theme`.
    pub const fn class_for(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::Light => self.light_class,
            Theme::Dark => self.dark_class,
        }
    }
}

/// Resolves the startup theme.
///
/// Returns the persisted theme when `persisted` is a valid token, otherwise dark when the OS
/// prefers dark mode, otherwise `fallback`. Invalid or corrupted tokens count as absent.
pub fn initialize_theme(
    persisted: Option<&str>,
    system_prefers_dark: bool,
    fallback: Theme,
) -> Theme {
    if let Some(theme) = persisted.and_then(Theme::parse) {
        return theme;
    }
    if system_prefers_dark {
        return Theme::Dark;
    }
    fallback
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pure two-state theme machine tracking whether the user made an explicit choice.
pub struct ThemePreference {
    current: Theme,
    explicit: bool,
}

impl ThemePreference {
    /// Builds the startup state. The choice counts as explicit only when `persisted` is valid.
    pub fn from_sources(
        persisted: Option<&str>,
        system_prefers_dark: bool,
        fallback: Theme,
    ) -> Self {
        Self {
            current: initialize_theme(persisted, system_prefers_dark, fallback),
            explicit: persisted.and_then(Theme::parse).is_some(),
        }
    }

    /// Returns the active theme.
    pub const fn current(&self) -> Theme {
        self.current
    }

    /// Returns whether an explicit user choice exists.
    pub const fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Applies a user choice. Returns whether the active theme changed.
    pub fn set(&mut self, theme: Theme) -> bool {
        self.explicit = true;
        let changed = self.current != theme;
        self.current = theme;
        changed
    }

    /// Flips the active theme as a user choice and returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.opposite();
        self.set(next);
        next
    }

    /// Records that an explicit choice exists without changing the active theme.
    pub fn mark_explicit(&mut self) {
        self.explicit = true;
    }

    /// Follows an OS preference change.
    ///
    /// Returns the new theme when it changed; returns `None` when an explicit choice exists or
    /// the theme already matches.
    pub fn apply_system_preference(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.explicit {
            return None;
        }
        let next = Theme::from_prefers_dark(prefers_dark);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn persisted_token_wins_over_system_and_fallback() {
        assert_eq!(initialize_theme(Some("light"), true, Theme::Dark), Theme::Light);
        assert_eq!(initialize_theme(Some("dark"), false, Theme::Light), Theme::Dark);
    }

    #[test]
    fn system_preference_wins_over_fallback() {
        assert_eq!(initialize_theme(None, true, Theme::Light), Theme::Dark);
        assert_eq!(initialize_theme(None, false, Theme::Dark), Theme::Dark);
        assert_eq!(initialize_theme(None, false, Theme::Light), Theme::Light);
    }

    #[test]
    fn invalid_persisted_tokens_behave_as_absent() {
        for raw in ["", "Dark", " light", "light ", "\"dark\"", "system", "1"] {
            for prefers_dark in [false, true] {
                for fallback in [Theme::Light, Theme::Dark] {
                    assert_eq!(
                        initialize_theme(Some(raw), prefers_dark, fallback),
                        initialize_theme(None, prefers_dark, fallback),
                        "token {raw:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn theme_tokens_and_serde_agree() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.token()), Some(theme));
            assert_eq!(theme.opposite().opposite(), theme);
        }
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn preference_is_explicit_only_for_valid_persisted_tokens() {
        assert!(ThemePreference::from_sources(Some("dark"), false, Theme::Light).is_explicit());
        assert!(!ThemePreference::from_sources(Some("bogus"), true, Theme::Light).is_explicit());
        assert!(!ThemePreference::from_sources(None, true, Theme::Light).is_explicit());
    }

    #[test]
    fn system_changes_apply_until_user_chooses() {
        let mut pref = ThemePreference::from_sources(None, false, Theme::Light);

        assert_eq!(pref.apply_system_preference(true), Some(Theme::Dark));
        assert_eq!(pref.apply_system_preference(true), None);
        assert_eq!(pref.apply_system_preference(false), Some(Theme::Light));

        assert!(!pref.set(Theme::Light));
        assert!(pref.is_explicit());
        assert_eq!(pref.apply_system_preference(true), None);
        assert_eq!(pref.current(), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_marks_explicit() {
        let mut pref = ThemePreference::from_sources(None, true, Theme::Light);
        assert_eq!(pref.toggle(), Theme::Light);
        assert_eq!(pref.toggle(), Theme::Dark);
        assert!(pref.is_explicit());
    }

    #[test]
    fn config_maps_each_theme_to_its_class() {
        let config = ThemeConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.class_for(Theme::Light), "light");
        assert_eq!(config.class_for(Theme::Dark), "dark");
        assert_eq!(
            config.with_default_theme(Theme::Dark).default_theme,
            Theme::Dark
        );
    }
}
