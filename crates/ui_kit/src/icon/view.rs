use leptos::*;

use super::{IconDefinition, IconRef, SharedIconRegistry};
use crate::primitives::merge_layout_class;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Rendered icon sizes.
pub enum IconSize {
    /// 16px.
    Sm,
    /// 20px.
    #[default]
    Md,
    /// 24px.
    Lg,
    /// 32px.
    Xl,
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Edge length in CSS pixels.
    pub fn pixels(self) -> u32 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
            Self::Xl => 32,
        }
    }
}

/// Resolves `icon` to a definition.
///
/// Registry entries win, so a re-registered built-in name takes effect. Built-ins fall back to
/// their static definition; custom names only resolve through the registry.
pub(crate) fn resolve_icon(
    icon: &IconRef,
    registry: Option<&SharedIconRegistry>,
) -> Option<IconDefinition> {
    if let Some(definition) = registry.and_then(|registry| registry.get(icon.key())) {
        return Some(definition);
    }
    match icon {
        IconRef::Builtin(name) => Some(name.builtin_definition()),
        IconRef::Custom(_) => None,
    }
}

#[component]
/// Inline SVG icon resolved from the built-in set or a runtime registry.
///
/// Unknown custom names render an empty `<svg>` marked `data-ui-missing="true"` and log a
/// warning.
pub fn Icon(
    #[prop(into)] icon: IconRef,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(default = None, into)] registry: Option<SharedIconRegistry>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let definition = resolve_icon(&icon, registry.as_ref());
    if definition.is_none() {
        logging::warn!("icon `{}` is not registered", icon.key());
    }
    let missing = definition.is_none();
    let definition = definition.unwrap_or_else(|| IconDefinition::new(Vec::new()));
    let pixels = size.pixels();
    let decorative = title.is_none();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class=merge_layout_class("ui-icon", layout_class)
            viewBox=definition.view_box.clone()
            width=pixels
            height=pixels
            role=(!decorative).then_some("img")
            aria-label=title
            aria-hidden=decorative.then_some("true")
            focusable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.key().to_string()
            data-ui-size=size.token()
            data-ui-missing=missing.then_some("true")
            inner_html=definition.content_markup()
        ></svg>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::icon::{IconName, IconShape};

    #[test]
    fn sizes_map_to_pixels_and_tokens() {
        assert_eq!(IconSize::Sm.pixels(), 16);
        assert_eq!(IconSize::Xl.pixels(), 32);
        assert_eq!(IconSize::default().token(), "md");
    }

    #[test]
    fn builtins_resolve_without_a_registry() {
        assert_eq!(
            resolve_icon(&IconName::Search.into(), None),
            Some(IconName::Search.builtin_definition())
        );
    }

    #[test]
    fn registry_overrides_builtins_and_serves_custom_names() {
        let registry = SharedIconRegistry::default();
        let custom = IconDefinition::new(vec![IconShape::new("rect")]);
        registry.register("search", custom.clone());
        registry.register("brand", custom.clone());

        assert_eq!(
            resolve_icon(&IconName::Search.into(), Some(&registry)),
            Some(custom.clone())
        );
        assert_eq!(resolve_icon(&"brand".into(), Some(&registry)), Some(custom));
    }

    #[test]
    fn unknown_custom_names_resolve_to_nothing() {
        let registry = SharedIconRegistry::default();
        assert_eq!(resolve_icon(&"nope".into(), Some(&registry)), None);
        assert_eq!(resolve_icon(&"nope".into(), None), None);
    }
}
