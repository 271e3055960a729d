use std::rc::Rc;

use leptos::*;
use platform_host::HostServices;

use super::{Theme, ThemeConfig, ThemeController};
use crate::icon::{Icon, IconName, IconSize, SharedIconRegistry};
use crate::primitives::{Button, ButtonSize, ButtonVariant};

#[derive(Clone, Copy)]
/// Reactive theme capability handed explicitly to components that read or change the theme.
///
/// The handle is `Copy`; every copy drives the same controller and signal.
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    controller: StoredValue<Rc<ThemeController>>,
}

/// Creates the theme capability for the current reactive owner.
///
/// The startup theme is applied to the document immediately. OS preference changes are observed
/// until the owner is cleaned up.
pub fn create_theme_context(services: &HostServices, config: ThemeConfig) -> ThemeContext {
    let controller = Rc::new(ThemeController::from_services(services, config));
    let theme = create_rw_signal(controller.theme());

    let subscription = services.color_scheme.subscribe(Rc::new({
        let controller = Rc::clone(&controller);
        move |prefers_dark| {
            if let Some(next) = controller.on_system_preference_change(prefers_dark) {
                theme.set(next);
            }
        }
    }));
    on_cleanup(move || subscription.cancel());

    ThemeContext {
        theme,
        controller: store_value(controller),
    }
}

impl ThemeContext {
    /// Returns the active theme as a reactive signal.
    pub fn theme(&self) -> Signal<Theme> {
        self.theme.into()
    }

    /// Returns whether dark mode is active, reactively.
    pub fn is_dark(&self) -> Signal<bool> {
        let theme = self.theme;
        Signal::derive(move || theme.get().is_dark())
    }

    /// Applies and persists a user choice.
    pub fn set_theme(&self, theme: Theme) {
        let next = self.controller.with_value(|controller| controller.set_theme(theme));
        self.theme.set(next);
    }

    /// Flips the theme as a user choice.
    pub fn toggle_theme(&self) {
        let next = self.controller.with_value(|controller| controller.toggle_theme());
        self.theme.set(next);
    }
}

#[component]
/// Icon button that toggles between light and dark mode.
///
/// Shows a sun while dark mode is active and a moon while light mode is active.
pub fn ThemeSwitcher(
    theme: ThemeContext,
    #[prop(default = None, into)] registry: Option<SharedIconRegistry>,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let is_dark = theme.is_dark();
    let label = Signal::derive(move || {
        if is_dark.get() {
            "Switch to light mode".to_string()
        } else {
            "Switch to dark mode".to_string()
        }
    });

    view! {
        <Button
            variant=ButtonVariant::Quiet
            size=size
            layout_class=layout_class.unwrap_or("")
            ui_slot="theme-switcher"
            aria_label=label
            title=label
            pressed=is_dark
            on_click=Callback::new(move |_| theme.toggle_theme())
        >
            {move || {
                let icon = if is_dark.get() { IconName::Sun } else { IconName::Moon };
                view! { <Icon icon size=IconSize::Md registry=registry.clone() /> }
            }}
        </Button>
    }
}
