use super::*;

#[component]
/// Compact status badge.
pub fn Badge(
    #[prop(default = Tone::Neutral)] tone: Tone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Inline message with a tone icon, an optional title, and an optional dismiss button.
///
/// Warning and danger alerts use `role="alert"`; other tones use `role="status"`.
pub fn Alert(
    #[prop(default = Tone::Info)] tone: Tone,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = None, into)] registry: Option<SharedIconRegistry>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let role = if tone.is_urgent() { "alert" } else { "status" };
    let dismiss_registry = registry.clone();

    view! {
        <div
            class=merge_layout_class("ui-alert", layout_class)
            role=role
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-tone=tone.token()
        >
            <span data-ui-slot="icon">
                <Icon icon=tone.icon() size=IconSize::Md registry=registry />
            </span>
            <div data-ui-slot="body">
                {title.map(|title| view! { <strong data-ui-slot="title">{title}</strong> })}
                <div data-ui-slot="description">{children()}</div>
            </div>
            {on_dismiss.map(|on_dismiss| {
                view! {
                    <IconButton
                        icon=IconName::Close
                        aria_label="Dismiss"
                        size=ButtonSize::Sm
                        registry=dismiss_registry
                        ui_slot="dismiss"
                        on_click=Callback::new(move |_| on_dismiss.call(()))
                    />
                }
            })}
        </div>
    }
}
