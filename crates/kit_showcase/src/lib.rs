//! Browser showcase rendering every `ui_kit` component against the real host adapters.
//!
//! Startup builds the host services for the compile-time host strategy, seeds the icon registry
//! (built-ins, inline markup, then remote SVG files in the background), and hands both to
//! [`ShowcaseApp`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod app;
mod focus;
mod icons;
mod story;

pub use app::ShowcaseApp;
pub use icons::{build_icon_registry, load_remote_icons, INLINE_ICONS, REMOTE_ICONS};
pub use story::{load_story, save_story, Story, STORY_PREFS_KEY};

/// Mounts the showcase into `<body>`.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    let services = platform_host_web::build_host_services();
    leptos::logging::log!(
        "kit showcase starting with {} host adapters",
        services.host_strategy.as_str()
    );
    let registry = build_icon_registry();
    leptos::mount_to_body(move || leptos::view! { <ShowcaseApp services registry /> })
}
