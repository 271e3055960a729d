use std::rc::Rc;

use platform_host::{
    AssetFetchError, AssetFetchFuture, AssetFetcher, ColorSchemeListener, ColorSchemeSource,
    ColorSchemeSubscription, HostServices, HostStrategy, MemoryColorSchemeSource,
    MemoryPrefsStore, MemoryThemeSurface, NoopAssetFetcher, PrefsStore, ThemeSurface,
};

use crate::{WebAssetFetcher, WebColorSchemeSource, WebPrefsStore, WebThemeSurface};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone)]
pub enum PrefsStoreAdapter {
    /// Browser `localStorage` preferences.
    Browser(WebPrefsStore),
    /// In-memory preferences that last for the page lifetime.
    Stub(MemoryPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Stub(store) => store.load_pref(key),
        }
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw),
            Self::Stub(store) => store.save_pref(key, raw),
        }
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.delete_pref(key),
            Self::Stub(store) => store.delete_pref(key),
        }
    }
}

/// Adapter enum that erases the concrete color-scheme backend behind [`ColorSchemeSource`].
#[derive(Debug, Clone)]
pub enum ColorSchemeSourceAdapter {
    /// Browser `matchMedia` color-scheme source.
    Browser(WebColorSchemeSource),
    /// In-memory source pinned to light mode until changed.
    Stub(MemoryColorSchemeSource),
}

impl ColorSchemeSource for ColorSchemeSourceAdapter {
    fn prefers_dark(&self) -> bool {
        match self {
            Self::Browser(source) => source.prefers_dark(),
            Self::Stub(source) => source.prefers_dark(),
        }
    }

    fn subscribe(&self, listener: ColorSchemeListener) -> ColorSchemeSubscription {
        match self {
            Self::Browser(source) => source.subscribe(listener),
            Self::Stub(source) => source.subscribe(listener),
        }
    }
}

/// Adapter enum that erases the concrete document backend behind [`ThemeSurface`].
#[derive(Debug, Clone)]
pub enum ThemeSurfaceAdapter {
    /// Browser document surface.
    Browser(WebThemeSurface),
    /// In-memory surface recording attributes and classes.
    Stub(MemoryThemeSurface),
}

impl ThemeSurface for ThemeSurfaceAdapter {
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), String> {
        match self {
            Self::Browser(surface) => surface.set_root_attribute(name, value),
            Self::Stub(surface) => surface.set_root_attribute(name, value),
        }
    }

    fn replace_body_class(&self, remove: &str, add: &str) -> Result<(), String> {
        match self {
            Self::Browser(surface) => surface.replace_body_class(remove, add),
            Self::Stub(surface) => surface.replace_body_class(remove, add),
        }
    }
}

/// Adapter enum that erases the concrete network backend behind [`AssetFetcher`].
#[derive(Debug, Clone, Copy)]
pub enum AssetFetcherAdapter {
    /// Browser `fetch` adapter.
    Browser(WebAssetFetcher),
    /// Offline fallback where every fetch fails.
    Stub(NoopAssetFetcher),
}

impl AssetFetcher for AssetFetcherAdapter {
    fn fetch_text<'a>(
        &'a self,
        url: &'a str,
    ) -> AssetFetchFuture<'a, Result<String, AssetFetchError>> {
        match self {
            Self::Browser(fetcher) => fetcher.fetch_text(url),
            Self::Stub(fetcher) => fetcher.fetch_text(url),
        }
    }
}

/// Builds the preferences adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Stub => PrefsStoreAdapter::Stub(MemoryPrefsStore::default()),
    }
}

/// Builds the color-scheme adapter for the compile-time selected host strategy.
pub fn color_scheme_source() -> ColorSchemeSourceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ColorSchemeSourceAdapter::Browser(WebColorSchemeSource),
        HostStrategy::Stub => ColorSchemeSourceAdapter::Stub(MemoryColorSchemeSource::new(false)),
    }
}

/// Builds the theme-surface adapter for the compile-time selected host strategy.
pub fn theme_surface() -> ThemeSurfaceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ThemeSurfaceAdapter::Browser(WebThemeSurface),
        HostStrategy::Stub => ThemeSurfaceAdapter::Stub(MemoryThemeSurface::default()),
    }
}

/// Builds the asset-fetcher adapter for the compile-time selected host strategy.
pub fn asset_fetcher() -> AssetFetcherAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => AssetFetcherAdapter::Browser(WebAssetFetcher),
        HostStrategy::Stub => AssetFetcherAdapter::Stub(NoopAssetFetcher),
    }
}

/// Builds the full host service bundle for application startup.
pub fn build_host_services() -> HostServices {
    HostServices {
        prefs: Rc::new(prefs_store()),
        color_scheme: Rc::new(color_scheme_source()),
        theme_surface: Rc::new(theme_surface()),
        assets: Rc::new(asset_fetcher()),
        host_strategy: selected_host_strategy(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[cfg(not(feature = "host-stub"))]
    #[test]
    fn default_build_selects_browser_adapters() {
        assert_eq!(selected_host_strategy(), HostStrategy::Browser);
        assert_eq!(host_strategy_name(), "browser");
        assert!(matches!(prefs_store(), PrefsStoreAdapter::Browser(_)));
        assert!(matches!(asset_fetcher(), AssetFetcherAdapter::Browser(_)));
    }

    #[cfg(feature = "host-stub")]
    #[test]
    fn stub_build_selects_memory_adapters() {
        assert_eq!(selected_host_strategy(), HostStrategy::Stub);
        let prefs = prefs_store();
        prefs.save_pref("theme", "dark").expect("save");
        assert_eq!(prefs.load_pref("theme").expect("load"), Some("dark".to_string()));
    }

    #[test]
    fn host_bundle_reports_selected_strategy() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, selected_host_strategy());
        assert!(!services.color_scheme.prefers_dark());
        services
            .theme_surface
            .replace_body_class("dark", "light")
            .expect("surface");
    }
}
