use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::ev::KeyboardEvent;
use leptos::*;

use super::{
    default_match, filter_options, AutocompleteOption, AutocompleteState, MatchPredicate,
    ValueSource, DEFAULT_OPTION_LIMIT,
};
use crate::icon::{IconName, SharedIconRegistry};
use crate::primitives::{
    bool_token, merge_layout_class, ButtonSize, CompletionItem, CompletionList, FieldVariant,
    IconButton, TextField,
};

static NEXT_LISTBOX_ID: AtomicUsize = AtomicUsize::new(0);

fn next_listbox_id() -> String {
    format!(
        "ui-autocomplete-{}",
        NEXT_LISTBOX_ID.fetch_add(1, Ordering::Relaxed)
    )
}

#[component]
/// Text input with a filtered suggestion list.
///
/// Passing `value` makes the input controlled: its text follows the value (shown as the matching
/// option's label) and changes are only reported through `on_change`. Without `value` the input
/// keeps its own text. With `allow_free_text` every keystroke is reported, not only selections.
pub fn Autocomplete(
    #[prop(into)] options: MaybeSignal<Vec<AutocompleteOption>>,
    #[prop(optional, into)] value: Option<MaybeSignal<String>>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] allow_free_text: bool,
    #[prop(optional)] predicate: Option<MatchPredicate>,
    #[prop(default = DEFAULT_OPTION_LIMIT)] limit: usize,
    #[prop(optional, into)] placeholder: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] empty_text: Option<String>,
    #[prop(default = None, into)] registry: Option<SharedIconRegistry>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let source = match value.as_ref() {
        Some(value) => ValueSource::Controlled(value.get_untracked()),
        None => ValueSource::Uncontrolled,
    };
    let state = create_rw_signal(options.with_untracked(|options| {
        AutocompleteState::new(source, allow_free_text, options)
    }));

    if let Some(value) = value {
        let options = options.clone();
        create_effect(move |_| {
            let external = value.get();
            options.with_untracked(|options| {
                state.update(|state| {
                    state.sync_external(&external, options);
                });
            });
        });
    }

    let predicate = predicate.unwrap_or_else(|| Rc::new(default_match) as MatchPredicate);
    let query = create_memo(move |_| state.with(|state| state.input_text().to_string()));
    let visible = {
        let options = options.clone();
        create_memo(move |_| {
            let query = query.get();
            options.with(|options| filter_options(options, &query, predicate.as_ref(), limit))
        })
    };
    let is_open = create_memo(move |_| state.with(AutocompleteState::is_open));
    let highlighted = create_memo(move |_| state.with(AutocompleteState::highlighted));

    let listbox_id = next_listbox_id();
    let option_id = {
        let listbox_id = listbox_id.clone();
        move |index: usize| format!("{listbox_id}-option-{index}")
    };
    let active_descendant = {
        let option_id = option_id.clone();
        Signal::derive(move || {
            if is_open.get() {
                highlighted.get().map(&option_id)
            } else {
                None
            }
        })
    };

    // Emit after the state borrow ends; `on_change` may write the controlled value.
    let emit = move |emitted: Option<String>| {
        if let (Some(emitted), Some(on_change)) = (emitted, on_change) {
            on_change.call(emitted);
        }
    };
    let choose = move |option: AutocompleteOption| {
        emit(state.try_update(|state| state.select(&option)).flatten());
    };

    let on_input = Callback::new(move |text: String| {
        emit(state.try_update(|state| state.input(text)).flatten());
    });
    let on_keydown = Callback::new(move |ev: KeyboardEvent| match ev.key().as_str() {
        "ArrowDown" => {
            ev.prevent_default();
            visible.with_untracked(|visible| {
                state.update(|state| {
                    state.highlight_next(visible);
                });
            });
        }
        "ArrowUp" => {
            ev.prevent_default();
            visible.with_untracked(|visible| {
                state.update(|state| {
                    state.highlight_previous(visible);
                });
            });
        }
        "Enter" => {
            if !is_open.get_untracked() {
                return;
            }
            ev.prevent_default();
            let emitted = visible.with_untracked(|visible| {
                state
                    .try_update(|state| {
                        if state.highlighted().is_some() {
                            state.commit_highlighted(visible)
                        } else {
                            state.dismiss();
                            None
                        }
                    })
                    .flatten()
            });
            emit(emitted);
        }
        "Escape" => {
            if is_open.get_untracked() {
                ev.prevent_default();
                state.update(AutocompleteState::dismiss);
            }
        }
        _ => {}
    });
    let on_focus = Callback::new(move |_| state.update(AutocompleteState::open));
    let on_blur = Callback::new(move |_| state.update(AutocompleteState::dismiss));
    let on_clear = Callback::new(move |_| {
        emit(state.try_update(AutocompleteState::clear).flatten());
    });

    let has_text = Signal::derive(move || !query.get().is_empty());
    let empty_text = empty_text.unwrap_or_else(|| "No matches".to_string());

    view! {
        <div
            class=merge_layout_class("ui-autocomplete", layout_class)
            data-ui-primitive="true"
            data-ui-kind="autocomplete"
            data-ui-open=move || bool_token(is_open.get())
        >
            <TextField
                variant=FieldVariant::Inset
                role="combobox".to_string()
                aria_label=aria_label
                aria_controls=listbox_id.clone()
                aria_expanded=Signal::from(is_open)
                aria_activedescendant=active_descendant
                placeholder=placeholder
                autocomplete="off"
                value=Signal::from(query)
                on_input=on_input
                on_keydown=on_keydown
                on_focus=on_focus
                on_blur=on_blur
            />
            <Show when=move || has_text.get()>
                <IconButton
                    icon=IconName::Close
                    aria_label="Clear"
                    size=ButtonSize::Sm
                    registry=registry.clone()
                    ui_slot="clear"
                    on_click=on_clear
                />
            </Show>
            <Show when=move || is_open.get()>
                {
                    let option_id = option_id.clone();
                    let empty_text = empty_text.clone();
                    view! {
                        <CompletionList id=listbox_id.clone()>
                            {move || {
                                let options = visible.get();
                                if options.is_empty() {
                                    return view! {
                                        <div data-ui-slot="empty" role="presentation">
                                            {empty_text.clone()}
                                        </div>
                                    }
                                    .into_view();
                                }
                                options
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, option)| {
                                        let label = option.label.clone();
                                        let disabled = option.disabled;
                                        view! {
                                            <CompletionItem
                                                id=option_id(index)
                                                selected=Signal::derive(move || {
                                                    highlighted.get() == Some(index)
                                                })
                                                disabled=disabled
                                                on_select=Callback::new(move |_| choose(option.clone()))
                                            >
                                                {label}
                                            </CompletionItem>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </CompletionList>
                    }
                }
            </Show>
        </div>
    }
}
