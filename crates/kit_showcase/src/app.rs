use std::rc::Rc;

use leptos::ev::KeyboardEvent;
use leptos::*;
use platform_host::HostServices;
use ui_kit::prelude::*;
use ui_kit::MatchPredicate;

use crate::focus::focus_element_by_id;
use crate::icons::load_remote_icons;
use crate::story::{load_story, save_story, Story};

fn fruit_options() -> Vec<AutocompleteOption> {
    vec![
        AutocompleteOption::new("apple", "Apple"),
        AutocompleteOption::new("apricot", "Apricot"),
        AutocompleteOption::new("banana", "Banana"),
        AutocompleteOption::new("blackberry", "Blackberry"),
        AutocompleteOption::new("cherry", "Cherry"),
        AutocompleteOption::new("durian", "Durian").disabled(),
        AutocompleteOption::new("grape", "Grape"),
        AutocompleteOption::new("mango", "Mango"),
        AutocompleteOption::new("papaya", "Papaya"),
        AutocompleteOption::new("pineapple", "Pineapple"),
    ]
}

#[component]
/// Showcase root: theme switcher header, story tabs, and the active story panel.
pub fn ShowcaseApp(
    /// Host adapters selected at startup.
    services: HostServices,
    /// Icon registry shared with every rendered icon.
    registry: SharedIconRegistry,
) -> impl IntoView {
    let theme = create_theme_context(&services, ThemeConfig::default());
    let prefs = Rc::clone(&services.prefs);
    let story = create_rw_signal(load_story(prefs.as_ref()));
    create_effect(move |previous: Option<Story>| {
        let current = story.get();
        if previous.is_some_and(|previous| previous != current) {
            save_story(prefs.as_ref(), current);
        }
        current
    });

    // Bumped once remote icons land so the gallery re-reads the registry.
    let icons_loaded = create_rw_signal(false);
    {
        let registry = registry.clone();
        let fetcher = Rc::clone(&services.assets);
        spawn_local(async move {
            load_remote_icons(&registry, fetcher.as_ref()).await;
            icons_loaded.set(true);
        });
    }

    // Roving tabindex: the newly selected tab also takes focus.
    let on_tab_keydown = Callback::new(move |ev: KeyboardEvent| {
        let Some(next) = story.get_untracked().after_key(&ev.key()) else {
            return;
        };
        ev.prevent_default();
        story.set(next);
        if !focus_element_by_id(&next.tab_id()) {
            logging::warn!("story tab `{}` is not focusable", next.tab_id());
        }
    });

    let header_registry = registry.clone();
    view! {
        <main class="kit-showcase" data-host-strategy=services.host_strategy.as_str()>
            <header class="kit-showcase-header">
                <Icon icon="brand-mark" size=IconSize::Lg registry=header_registry.clone() />
                <h1>"UI Kit"</h1>
                <ThemeSwitcher theme registry=header_registry />
            </header>
            <TabList aria_label="Stories">
                {Story::ALL
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <Tab
                                id=entry.tab_id()
                                controls=entry.panel_id()
                                selected=Signal::derive(move || story.get() == entry)
                                on_click=Callback::new(move |_| story.set(entry))
                                on_keydown=on_tab_keydown
                            >
                                {entry.label()}
                            </Tab>
                        }
                    })
                    .collect_view()}
            </TabList>
            <section
                class="kit-showcase-panel"
                role="tabpanel"
                id=move || story.get().panel_id()
                aria-labelledby=move || story.get().tab_id()
            >
                {move || match story.get() {
                    Story::Controls => view! { <ControlsStory registry=registry.clone() /> }.into_view(),
                    Story::Feedback => view! { <FeedbackStory registry=registry.clone() /> }.into_view(),
                    Story::Icons => {
                        view! { <IconsStory registry=registry.clone() loaded=icons_loaded /> }
                            .into_view()
                    }
                    Story::Autocomplete => {
                        view! { <AutocompleteStory registry=registry.clone() /> }.into_view()
                    }
                    Story::Theme => view! { <ThemeStory theme registry=registry.clone() /> }.into_view(),
                }}
            </section>
        </main>
    }
}

#[component]
fn ControlsStory(registry: SharedIconRegistry) -> impl IntoView {
    let clicks = create_rw_signal(0_u32);
    let notifications = create_rw_signal(true);
    let starred = create_rw_signal(false);

    view! {
        <div class="kit-story" data-story="controls">
            <h2>"Buttons"</h2>
            <div class="kit-row">
                <Button
                    variant=ButtonVariant::Primary
                    leading_icon=IconName::Plus
                    on_click=Callback::new(move |_| clicks.update(|count| *count += 1))
                >
                    "Add"
                </Button>
                <Button>"Standard"</Button>
                <Button variant=ButtonVariant::Quiet trailing_icon=IconName::ChevronRight>
                    "Quiet"
                </Button>
                <Button variant=ButtonVariant::Danger size=ButtonSize::Sm>"Delete"</Button>
                <Button disabled=true>"Disabled"</Button>
                <span>{move || format!("Clicked {} times", clicks.get())}</span>
            </div>
            <h2>"Icon buttons"</h2>
            <div class="kit-row">
                <IconButton
                    icon=IconName::Star
                    aria_label="Star"
                    pressed=starred
                    registry=registry.clone()
                    on_click=Callback::new(move |_| starred.update(|value| *value = !*value))
                />
                <IconButton icon=IconName::Menu aria_label="Menu" registry=registry.clone() />
                <IconButton icon="brand-mark" aria_label="Brand" size=ButtonSize::Lg registry />
            </div>
            <h2>"Switch"</h2>
            <div class="kit-row">
                <Switch
                    aria_label="Notifications"
                    checked=notifications
                    on_toggle=Callback::new(move |next| notifications.set(next))
                />
                <span>{move || if notifications.get() { "Notifications on" } else { "Notifications off" }}</span>
                <Switch aria_label="Unavailable" disabled=true />
            </div>
        </div>
    }
}

#[component]
fn FeedbackStory(registry: SharedIconRegistry) -> impl IntoView {
    let progress = create_rw_signal(40_u16);
    let show_warning = create_rw_signal(true);

    view! {
        <div class="kit-story" data-story="feedback">
            <h2>"Badges"</h2>
            <div class="kit-row">
                <Badge>"Neutral"</Badge>
                <Badge tone=Tone::Info>"Info"</Badge>
                <Badge tone=Tone::Success>"Success"</Badge>
                <Badge tone=Tone::Warning>"Warning"</Badge>
                <Badge tone=Tone::Danger>"Danger"</Badge>
            </div>
            <h2>"Alerts"</h2>
            <Alert tone=Tone::Info title="Heads up" registry=registry.clone()>
                "Alerts pick their icon from the tone."
            </Alert>
            <Alert tone=Tone::Success registry=registry.clone()>"Saved."</Alert>
            <Show when=move || show_warning.get()>
                <Alert
                    tone=Tone::Warning
                    title="Storage almost full"
                    registry=registry.clone()
                    on_dismiss=Callback::new(move |_| show_warning.set(false))
                >
                    "Dismiss this alert to hide it."
                </Alert>
            </Show>
            <h2>"Progress"</h2>
            <div class="kit-row">
                <ProgressBar aria_label="Upload" value=progress />
                <Button
                    size=ButtonSize::Sm
                    leading_icon=IconName::Minus
                    on_click=Callback::new(move |_| progress.update(|value| *value = value.saturating_sub(10)))
                >
                    "Less"
                </Button>
                <Button
                    size=ButtonSize::Sm
                    leading_icon=IconName::Plus
                    on_click=Callback::new(move |_| progress.update(|value| *value = value.saturating_add(10)))
                >
                    "More"
                </Button>
                <span>{move || format!("{}%", progress.get().min(100))}</span>
            </div>
        </div>
    }
}

#[component]
fn IconsStory(registry: SharedIconRegistry, loaded: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="kit-story" data-story="icons">
            <h2>"Registered icons"</h2>
            <p>
                {move || if loaded.get() { "Remote icons loaded." } else { "Loading remote icons..." }}
            </p>
            <ul class="kit-icon-grid">
                {
                    let registry = registry.clone();
                    move || {
                        loaded.track();
                        registry
                            .names()
                            .into_iter()
                            .map(|name| {
                                view! {
                                    <li>
                                        <Icon icon=name.clone() size=IconSize::Xl registry=registry.clone() />
                                        <code>{name}</code>
                                    </li>
                                }
                            })
                            .collect_view()
                    }
                }
            </ul>
            <h2>"Missing icon"</h2>
            <p>"Unregistered names render an empty, marked placeholder."</p>
            <Icon icon="not-registered" size=IconSize::Xl registry />
        </div>
    }
}

#[component]
fn AutocompleteStory(registry: SharedIconRegistry) -> impl IntoView {
    let options = fruit_options();
    let uncontrolled_value = create_rw_signal(String::new());
    let controlled_value = create_rw_signal("cherry".to_string());
    let free_text_value = create_rw_signal(String::new());
    let starts_with: MatchPredicate = Rc::new(|option: &AutocompleteOption, query: &str| {
        option.label.to_lowercase().starts_with(&query.to_lowercase())
    });

    view! {
        <div class="kit-story" data-story="autocomplete">
            <h2>"Uncontrolled"</h2>
            <Autocomplete
                options=options.clone()
                aria_label="Fruit"
                placeholder="Search fruit"
                registry=registry.clone()
                on_change=Callback::new(move |value| uncontrolled_value.set(value))
            />
            <p>{move || format!("Selected value: {:?}", uncontrolled_value.get())}</p>

            <h2>"Controlled"</h2>
            <Autocomplete
                options=options.clone()
                value=controlled_value
                aria_label="Fruit (controlled)"
                registry=registry.clone()
                on_change=Callback::new(move |value| controlled_value.set(value))
            />
            <div class="kit-row">
                <Button size=ButtonSize::Sm on_click=Callback::new(move |_| controlled_value.set("mango".to_string()))>
                    "Pick mango"
                </Button>
                <Button size=ButtonSize::Sm on_click=Callback::new(move |_| controlled_value.set(String::new()))>
                    "Reset"
                </Button>
                <span>{move || format!("Value: {:?}", controlled_value.get())}</span>
            </div>

            <h2>"Free text, prefix match, three results"</h2>
            <Autocomplete
                options=options
                allow_free_text=true
                predicate=starts_with
                limit=3
                aria_label="Fruit (free text)"
                empty_text="Nothing starts with that"
                registry
                on_change=Callback::new(move |value| free_text_value.set(value))
            />
            <p>{move || format!("Typed: {:?}", free_text_value.get())}</p>
        </div>
    }
}

#[component]
fn ThemeStory(theme: ThemeContext, registry: SharedIconRegistry) -> impl IntoView {
    let current = theme.theme();

    view! {
        <div class="kit-story" data-story="theme">
            <h2>"Theme"</h2>
            <p>{move || format!("Current theme: {}", current.get())}</p>
            <div class="kit-row">
                <ThemeSwitcher theme registry=registry.clone() size=ButtonSize::Lg />
                <Button
                    leading_icon=IconName::Sun
                    selected=Signal::derive(move || current.get() == Theme::Light)
                    on_click=Callback::new(move |_| theme.set_theme(Theme::Light))
                >
                    "Light"
                </Button>
                <Button
                    leading_icon=IconName::Moon
                    selected=Signal::derive(move || current.get() == Theme::Dark)
                    on_click=Callback::new(move |_| theme.set_theme(Theme::Dark))
                >
                    "Dark"
                </Button>
            </div>
            <p>"Choosing a theme here stops it from following the system setting."</p>
        </div>
    }
}
