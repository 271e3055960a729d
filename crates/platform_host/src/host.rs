//! Shared host-bundle model for browser and stub compositions.

use std::rc::Rc;

use crate::{AssetFetcher, ColorSchemeSource, PrefsStore, ThemeSurface};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed adapters.
    Browser,
    /// In-memory adapters used for headless runs and previews outside a browser.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Host service bundle injected into the UI kit at application startup.
///
/// All environment-specific adapter selection happens before this bundle crosses into the kit,
/// which keeps components decoupled from browser details.
#[derive(Clone)]
pub struct HostServices {
    /// Lightweight preference store (holds the persisted theme token).
    pub prefs: Rc<dyn PrefsStore>,
    /// OS color-scheme preference source.
    pub color_scheme: Rc<dyn ColorSchemeSource>,
    /// Document surface that reflects the active theme.
    pub theme_surface: Rc<dyn ThemeSurface>,
    /// Text asset fetcher used for SVG icon files.
    pub assets: Rc<dyn AssetFetcher>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
