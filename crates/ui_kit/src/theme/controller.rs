use std::{cell::RefCell, fmt, rc::Rc};

use leptos::logging;
use platform_host::{ColorSchemeSource, HostServices, PrefsStore, ThemeSurface};

use super::{Theme, ThemeConfig, ThemePreference};

/// Binds a [`ThemePreference`] to preference storage and the document theme surface.
///
/// Every theme change is reflected to the surface as the root attribute plus exactly one of the
/// two body classes. User choices are persisted verbatim; OS-driven changes are not, so a
/// session that follows the OS keeps following it.
pub struct ThemeController {
    config: ThemeConfig,
    prefs: Rc<dyn PrefsStore>,
    surface: Rc<dyn ThemeSurface>,
    state: RefCell<ThemePreference>,
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("config", &self.config)
            .field("state", &self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl ThemeController {
    /// Resolves the startup theme from `prefs` and `color_scheme` and applies it to `surface`.
    pub fn new(
        config: ThemeConfig,
        prefs: Rc<dyn PrefsStore>,
        color_scheme: &dyn ColorSchemeSource,
        surface: Rc<dyn ThemeSurface>,
    ) -> Self {
        let persisted = load_persisted(prefs.as_ref(), config.storage_key);
        let state = ThemePreference::from_sources(
            persisted.as_deref(),
            color_scheme.prefers_dark(),
            config.default_theme,
        );
        let controller = Self {
            config,
            prefs,
            surface,
            state: RefCell::new(state),
        };
        controller.apply_surface(state.current());
        controller
    }

    /// Builds a controller from the startup host bundle.
    pub fn from_services(services: &HostServices, config: ThemeConfig) -> Self {
        Self::new(
            config,
            Rc::clone(&services.prefs),
            services.color_scheme.as_ref(),
            Rc::clone(&services.theme_surface),
        )
    }

    /// Returns the active theme.
    pub fn theme(&self) -> Theme {
        self.state.borrow().current()
    }

    /// Returns whether an explicit user choice exists.
    pub fn is_explicit(&self) -> bool {
        self.state.borrow().is_explicit()
    }

    /// Returns the configuration this controller was built with.
    pub fn config(&self) -> ThemeConfig {
        self.config
    }

    /// Applies and persists a user choice.
    pub fn set_theme(&self, theme: Theme) -> Theme {
        self.state.borrow_mut().set(theme);
        self.persist(theme);
        self.apply_surface(theme);
        theme
    }

    /// Flips the theme as a user choice and returns the new theme.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme().opposite();
        self.set_theme(next)
    }

    /// Follows an OS preference change unless an explicit choice exists.
    ///
    /// A valid token found in storage counts as an explicit choice even when it was written
    /// outside this controller (for example by another tab). Returns the new theme when the
    /// active theme changed.
    ///
    /// Unlike user choices, an OS-driven change only updates the document surface and is never
    /// written to storage. Persisting it would turn it into an explicit choice and the session
    /// would stop following the OS.
    pub fn on_system_preference_change(&self, prefers_dark: bool) -> Option<Theme> {
        if load_persisted(self.prefs.as_ref(), self.config.storage_key)
            .as_deref()
            .and_then(Theme::parse)
            .is_some()
        {
            self.state.borrow_mut().mark_explicit();
        }
        let next = self.state.borrow_mut().apply_system_preference(prefers_dark)?;
        self.apply_surface(next);
        Some(next)
    }

    fn persist(&self, theme: Theme) {
        if let Err(err) = self.prefs.save_pref(self.config.storage_key, theme.token()) {
            logging::warn!("theme persist failed: {err}");
        }
    }

    fn apply_surface(&self, theme: Theme) {
        if let Err(err) = self
            .surface
            .set_root_attribute(self.config.root_attribute, theme.token())
        {
            logging::warn!("theme root attribute update failed: {err}");
        }
        let stale = self.config.class_for(theme.opposite());
        if let Err(err) = self
            .surface
            .replace_body_class(stale, self.config.class_for(theme))
        {
            logging::warn!("theme body class update failed: {err}");
        }
    }
}

fn load_persisted(prefs: &dyn PrefsStore, key: &str) -> Option<String> {
    match prefs.load_pref(key) {
        Ok(raw) => raw,
        Err(err) => {
            logging::warn!("theme preference load failed: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{MemoryColorSchemeSource, MemoryPrefsStore, MemoryThemeSurface};
    use pretty_assertions::assert_eq;

    use super::*;

    struct Harness {
        prefs: MemoryPrefsStore,
        surface: MemoryThemeSurface,
        controller: ThemeController,
    }

    fn harness(persisted: Option<&str>, prefers_dark: bool) -> Harness {
        let prefs = MemoryPrefsStore::default();
        if let Some(raw) = persisted {
            prefs.save_pref("theme", raw).expect("seed");
        }
        let surface = MemoryThemeSurface::default();
        let controller = ThemeController::new(
            ThemeConfig::default(),
            Rc::new(prefs.clone()),
            &MemoryColorSchemeSource::new(prefers_dark),
            Rc::new(surface.clone()),
        );
        Harness {
            prefs,
            surface,
            controller,
        }
    }

    fn assert_surface_matches(surface: &MemoryThemeSurface, theme: Theme) {
        assert_eq!(
            surface.root_attribute("data-theme"),
            Some(theme.token().to_string())
        );
        assert_eq!(surface.body_classes(), vec![theme.token().to_string()]);
    }

    #[derive(Debug, Default)]
    struct FailingPrefs;

    impl PrefsStore for FailingPrefs {
        fn load_pref(&self, _key: &str) -> Result<Option<String>, String> {
            Err("storage disabled".to_string())
        }

        fn save_pref(&self, _key: &str, _raw: &str) -> Result<(), String> {
            Err("storage disabled".to_string())
        }

        fn delete_pref(&self, _key: &str) -> Result<(), String> {
            Err("storage disabled".to_string())
        }
    }

    #[test]
    fn startup_applies_resolved_theme_without_persisting() {
        let h = harness(None, true);
        assert_eq!(h.controller.theme(), Theme::Dark);
        assert_surface_matches(&h.surface, Theme::Dark);
        assert_eq!(h.prefs.raw("theme"), None);
    }

    #[test]
    fn corrupted_token_falls_through_to_system_preference() {
        let h = harness(Some("purple"), true);
        assert_eq!(h.controller.theme(), Theme::Dark);
        assert!(!h.controller.is_explicit());
    }

    #[test]
    fn every_user_change_keeps_exactly_one_body_class() {
        let h = harness(Some("light"), false);
        h.surface.add_body_class("ui-root");

        let steps = [
            h.controller.toggle_theme(),
            h.controller.set_theme(Theme::Dark),
            h.controller.toggle_theme(),
            h.controller.set_theme(Theme::Light),
            h.controller.toggle_theme(),
        ];
        assert_eq!(
            steps,
            [Theme::Dark, Theme::Dark, Theme::Light, Theme::Light, Theme::Dark]
        );
        assert_eq!(
            h.surface.root_attribute("data-theme"),
            Some("dark".to_string())
        );
        assert_eq!(
            h.surface.body_classes(),
            vec!["dark".to_string(), "ui-root".to_string()]
        );
        assert_eq!(h.prefs.raw("theme"), Some("dark".to_string()));
    }

    #[test]
    fn system_changes_follow_os_until_user_sets_theme() {
        let h = harness(None, false);

        assert_eq!(h.controller.on_system_preference_change(true), Some(Theme::Dark));
        assert_surface_matches(&h.surface, Theme::Dark);
        assert_eq!(h.prefs.raw("theme"), None);
        assert_eq!(h.controller.on_system_preference_change(false), Some(Theme::Light));
        assert_eq!(h.prefs.raw("theme"), None);
        assert!(!h.controller.is_explicit());
        assert_eq!(h.controller.on_system_preference_change(true), Some(Theme::Dark));

        h.controller.set_theme(Theme::Light);
        assert_eq!(h.controller.on_system_preference_change(true), None);
        assert_eq!(h.controller.on_system_preference_change(false), None);
        assert_eq!(h.controller.theme(), Theme::Light);
    }

    #[test]
    fn system_change_respects_choice_persisted_elsewhere() {
        let h = harness(None, false);
        h.prefs.save_pref("theme", "light").expect("other tab");

        assert_eq!(h.controller.on_system_preference_change(true), None);
        assert_eq!(h.controller.theme(), Theme::Light);
        assert!(h.controller.is_explicit());
    }

    #[test]
    fn persistence_failures_do_not_block_theme_changes() {
        let surface = MemoryThemeSurface::default();
        let controller = ThemeController::new(
            ThemeConfig::default().with_default_theme(Theme::Dark),
            Rc::new(FailingPrefs),
            &MemoryColorSchemeSource::new(false),
            Rc::new(surface.clone()),
        );
        assert_eq!(controller.theme(), Theme::Dark);

        assert_eq!(controller.toggle_theme(), Theme::Light);
        assert_surface_matches(&surface, Theme::Light);
        assert_eq!(controller.on_system_preference_change(true), None);
    }

    #[test]
    fn custom_config_drives_key_attribute_and_classes() {
        let prefs = MemoryPrefsStore::default();
        let surface = MemoryThemeSurface::default();
        let config = ThemeConfig {
            storage_key: "kit.theme",
            default_theme: Theme::Light,
            root_attribute: "data-mode",
            light_class: "theme-light",
            dark_class: "theme-dark",
        };
        let controller = ThemeController::new(
            config,
            Rc::new(prefs.clone()),
            &MemoryColorSchemeSource::new(false),
            Rc::new(surface.clone()),
        );

        controller.set_theme(Theme::Dark);
        assert_eq!(prefs.raw("kit.theme"), Some("dark".to_string()));
        assert_eq!(surface.root_attribute("data-mode"), Some("dark".to_string()));
        assert_eq!(surface.body_classes(), vec!["theme-dark".to_string()]);
    }
}
