//! Icon registry seeding for the showcase.

use leptos::logging;
use platform_host::AssetFetcher;
use ui_kit::{IconError, SharedIconRegistry};

/// Custom icons registered from inline SVG markup at startup.
pub const INLINE_ICONS: &[(&str, &str)] = &[
    (
        "brand-mark",
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <rect x="3" y="3" width="18" height="18" rx="5" fill="none" stroke="currentColor" strokeWidth="2"/>
  <path d="M8 12h8M12 8v8" stroke="currentColor" strokeWidth="2" strokeLinecap="round"/>
</svg>"#,
    ),
    (
        "badge-dot",
        r#"<svg viewBox="0 0 16 16"><circle cx="8" cy="8" r="4" fill="currentColor"/></svg>"#,
    ),
];

/// Custom icons fetched from the static site root after mount.
pub const REMOTE_ICONS: &[(&str, &str)] = &[
    ("leaf", "icons/leaf.svg"),
    ("sparkle", "icons/sparkle.svg"),
];

/// Builds the showcase registry: every built-in plus [`INLINE_ICONS`].
pub fn build_icon_registry() -> SharedIconRegistry {
    let registry = SharedIconRegistry::with_builtin_icons();
    let registered = registry.register_many_from_markup(INLINE_ICONS.iter().copied());
    logging::log!(
        "registered {registered} of {} inline icons",
        INLINE_ICONS.len()
    );
    registry
}

/// Fetches [`REMOTE_ICONS`] into `registry`, returning the entries that failed.
pub async fn load_remote_icons(
    registry: &SharedIconRegistry,
    fetcher: &dyn AssetFetcher,
) -> Vec<(String, IconError)> {
    let failures = registry
        .register_many_from_urls(fetcher, REMOTE_ICONS.iter().copied())
        .await;
    if !failures.is_empty() {
        logging::warn!(
            "{} of {} remote icons failed to load",
            failures.len(),
            REMOTE_ICONS.len()
        );
    }
    failures
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryAssetFetcher;
    use pretty_assertions::assert_eq;
    use ui_kit::IconName;

    use super::*;

    #[test]
    fn registry_holds_builtins_and_inline_icons() {
        let registry = build_icon_registry();
        assert_eq!(registry.len(), IconName::ALL.len() + INLINE_ICONS.len());

        let brand = registry.get("brand-mark").expect("brand mark");
        assert_eq!(brand.shapes.len(), 2);
        assert_eq!(brand.shapes[0].attribute("stroke-width"), Some("2"));
        assert_eq!(registry.get("badge-dot").expect("dot").view_box, "0 0 16 16");
    }

    #[test]
    fn remote_icons_register_and_report_failures() {
        let fetcher = MemoryAssetFetcher::default();
        fetcher.insert_text(
            "icons/leaf.svg",
            include_str!("../public/icons/leaf.svg"),
        );
        fetcher.insert_status("icons/sparkle.svg", 404);
        let registry = build_icon_registry();

        let failures = block_on(load_remote_icons(&registry, &fetcher));

        assert!(registry.has("leaf"));
        assert!(!registry.has("sparkle"));
        assert_eq!(
            failures,
            vec![(
                "sparkle".to_string(),
                IconError::Status {
                    url: "icons/sparkle.svg".to_string(),
                    status: 404,
                },
            )]
        );
    }

    #[test]
    fn bundled_remote_icons_parse() {
        for markup in [
            include_str!("../public/icons/leaf.svg"),
            include_str!("../public/icons/sparkle.svg"),
        ] {
            let definition = ui_kit::icon::parse_svg_markup(markup).expect("parse");
            assert!(!definition.shapes.is_empty());
        }
    }
}
