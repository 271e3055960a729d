//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for preference storage
//! (`localStorage`), the OS color-scheme preference (`matchMedia`), the document theme surface,
//! and SVG asset fetching (`fetch`). Every adapter compiles on non-wasm targets too, where it
//! degrades to the behavior of the matching `Noop*` contract implementation so the workspace
//! builds and tests natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for startup wiring.
pub mod adapters;
pub mod appearance;
pub mod assets;
#[cfg(target_arch = "wasm32")]
mod interop;
pub mod storage;

pub use adapters::{
    asset_fetcher, build_host_services, color_scheme_source, host_strategy_name, prefs_store,
    selected_host_strategy, theme_surface, AssetFetcherAdapter, ColorSchemeSourceAdapter,
    PrefsStoreAdapter, ThemeSurfaceAdapter,
};
pub use appearance::color_scheme::WebColorSchemeSource;
pub use appearance::surface::WebThemeSurface;
pub use assets::WebAssetFetcher;
pub use storage::local_prefs::WebPrefsStore;
