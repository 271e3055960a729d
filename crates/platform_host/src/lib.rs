//! Typed host-service contracts consumed by the UI kit and its browser adapters.
//!
//! This crate is the API-first boundary between the kit and the environment it runs in. It
//! exposes preference storage, the OS color-scheme source, the document theme surface, and SVG
//! asset fetching as small traits. Every contract ships a `Noop*` adapter for unsupported targets
//! and a `Memory*` adapter for tests, while the concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod appearance;
pub mod assets;
pub mod host;
pub mod storage;

pub use appearance::color_scheme::{
    ColorSchemeListener, ColorSchemeSource, ColorSchemeSubscription, MemoryColorSchemeSource,
    NoopColorSchemeSource, DARK_SCHEME_QUERY,
};
pub use appearance::surface::{MemoryThemeSurface, NoopThemeSurface, ThemeSurface};
pub use assets::{
    AssetFetchError, AssetFetchFuture, AssetFetcher, MemoryAssetFetcher, NoopAssetFetcher,
};
pub use host::{HostServices, HostStrategy};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore,
    THEME_PREFS_KEY,
};
